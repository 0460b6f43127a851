//! # pdoc-orchestrator — Request Orchestration
//!
//! Drives the document pipeline for generation requests.
//!
//! ## Architecture
//!
//! - [`DocumentPipeline`] composes the stateless stages (analysis, cultural
//!   adaptation, template resolution, synthesis, validation, scoring) for
//!   one document type.
//! - [`DocumentGenerationOrchestrator`] validates the request, fans document
//!   types out to the blocking pool under a concurrency limit, isolates
//!   per-type failures, and owns the request's [`GenerationStatus`].
//! - [`GenerationHandle`] gives callers status snapshots, cancellation and
//!   the final [`GenerationOutcome`].
//!
//! ## Metrics
//!
//! Recorded through the `metrics` facade; installing an exporter is the
//! embedding application's job.
//!
//! | Name | Kind | Labels |
//! |------|------|--------|
//! | `pdoc_documents_generated_total` | counter | |
//! | `pdoc_document_failures_total` | counter | `kind` |
//! | `pdoc_requests_total` | counter | `outcome` |
//! | `pdoc_aggregate_compliance_score` | histogram | |

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod request;
pub mod status;

pub use config::{ConfigError, OrchestratorConfig};
pub use error::{DocumentFailure, ErrorKind, GenerationError};
pub use orchestrator::{DocumentGenerationOrchestrator, GenerationHandle};
pub use pipeline::{DocumentPipeline, PipelineJob, PipelineStage};
pub use request::{GeneratedDocument, GenerationOutcome, GenerationRequest};
pub use status::{GenerationState, GenerationStatus, StatusError, TransitionRecord};
