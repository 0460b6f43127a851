//! # Document Generation Orchestrator
//!
//! Entry point of the pipeline. One call to [`DocumentGenerationOrchestrator::start`]
//! handles one request:
//!
//! 1. Validate the business profile. A missing required field fails the
//!    whole request before any stage runs.
//! 2. Parse and de-duplicate the document types. Unknown identifiers become
//!    `UnsupportedDocumentType` failures; the rest of the batch continues.
//! 3. Fan the valid types out to the blocking pool, at most
//!    `max_concurrency` at a time. Each type runs the whole
//!    [`DocumentPipeline`] as one unit; its failure is captured as data and
//!    never aborts its siblings.
//! 4. Fold stage reports into the request's [`GenerationStatus`], which only
//!    the request task mutates. Observers get snapshots over a `watch`
//!    channel.
//!
//! The request completes when at least one document was generated, and
//! fails otherwise.
//!
//! Cancellation is cooperative: types that have not started when the token
//! fires are recorded as `Cancelled`; types already running finish and
//! their documents are kept.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use pdoc_analysis::BusinessAnalysis;
use pdoc_core::{BusinessProfile, DocumentType, ProfileInput, RequestId};
use pdoc_rules::RuleTables;
use tokio::sync::{mpsc, watch, Semaphore};
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::{ConfigError, OrchestratorConfig};
use crate::error::{DocumentFailure, ErrorKind, GenerationError};
use crate::pipeline::{DocumentPipeline, PipelineJob, PipelineStage};
use crate::request::{GeneratedDocument, GenerationOutcome, GenerationRequest};
use crate::status::{GenerationState, GenerationStatus, ACCEPTED_PROGRESS};

/// Share of the progress bar covered by pipeline stages.
const STAGE_PROGRESS_SPAN: usize = 90;

/// Drives generation requests over one shared, immutable pipeline.
#[derive(Debug, Clone)]
pub struct DocumentGenerationOrchestrator {
    pipeline: Arc<DocumentPipeline>,
    config: OrchestratorConfig,
}

impl DocumentGenerationOrchestrator {
    /// Create an orchestrator over `tables`.
    pub fn new(tables: Arc<RuleTables>, config: OrchestratorConfig) -> Self {
        Self {
            pipeline: Arc::new(DocumentPipeline::new(tables)),
            config,
        }
    }

    /// Create an orchestrator over the rule tables `config` selects.
    pub fn from_config(config: OrchestratorConfig) -> Result<Self, ConfigError> {
        config.check()?;
        let tables = config.load_rules()?;
        Ok(Self::new(Arc::new(tables), config))
    }

    /// The active configuration.
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// The shared pipeline.
    pub fn pipeline(&self) -> &DocumentPipeline {
        &self.pipeline
    }

    /// Analysis only, for a live preview before full generation.
    pub fn analyze(
        &self,
        profile: &ProfileInput,
        document_type: &str,
    ) -> Result<BusinessAnalysis, GenerationError> {
        let profile = BusinessProfile::from_input(profile)?;
        let dt: DocumentType = document_type
            .parse()
            .map_err(|_| GenerationError::UnsupportedDocumentType(document_type.to_string()))?;
        Ok(self.pipeline.analyze(&profile, dt))
    }

    /// Run `request` to completion.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, GenerationError> {
        self.start(request).wait().await
    }

    /// Start `request` on the current tokio runtime and return a handle for
    /// progress snapshots, cancellation and the final outcome.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, request: GenerationRequest) -> GenerationHandle {
        let request_id = RequestId::new();
        let (status_tx, status_rx) = watch::channel(GenerationStatus::new(request_id));
        let cancel = CancellationToken::new();
        let run = RequestRun {
            pipeline: self.pipeline.clone(),
            config: self.config.clone(),
            request_id,
            status_tx,
            cancel: cancel.clone(),
        };
        let span = tracing::info_span!("generate", request_id = %request_id.as_uuid());
        let task = tokio::spawn(run.execute(request).instrument(span));
        GenerationHandle {
            request_id,
            status: status_rx,
            cancel,
            task,
        }
    }
}

// ─── Handle ──────────────────────────────────────────────────────────

/// Handle on a running generation request.
#[derive(Debug)]
pub struct GenerationHandle {
    request_id: RequestId,
    status: watch::Receiver<GenerationStatus>,
    cancel: CancellationToken,
    task: JoinHandle<Result<GenerationOutcome, GenerationError>>,
}

impl GenerationHandle {
    /// The request id.
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// The latest status snapshot.
    pub fn status(&self) -> GenerationStatus {
        self.status.borrow().clone()
    }

    /// A receiver of status snapshots.
    pub fn subscribe(&self) -> watch::Receiver<GenerationStatus> {
        self.status.clone()
    }

    /// Skip every document type that has not started yet.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the final outcome.
    pub async fn wait(self) -> Result<GenerationOutcome, GenerationError> {
        match self.task.await {
            Ok(result) => result,
            Err(join_error) => Err(GenerationError::ExecutionFailure {
                document_type: None,
                detail: join_error.to_string(),
            }),
        }
    }
}

// ─── Request Run ─────────────────────────────────────────────────────

struct StageEvent {
    document_type: DocumentType,
    stage: PipelineStage,
}

/// The task that owns one request's status.
struct RequestRun {
    pipeline: Arc<DocumentPipeline>,
    config: OrchestratorConfig,
    request_id: RequestId,
    status_tx: watch::Sender<GenerationStatus>,
    cancel: CancellationToken,
}

impl RequestRun {
    async fn execute(self, request: GenerationRequest) -> Result<GenerationOutcome, GenerationError> {
        let mut status = GenerationStatus::new(self.request_id);

        let profile = match BusinessProfile::from_input(&request.business_profile) {
            Ok(profile) => profile,
            Err(e) => return Err(self.reject(&mut status, e.into())),
        };
        if request.document_types.is_empty() {
            return Err(self.reject(&mut status, GenerationError::EmptyRequest));
        }

        let mut failures = Vec::new();
        let mut document_types = Vec::new();
        for raw in &request.document_types {
            match raw.parse::<DocumentType>() {
                Ok(dt) if !document_types.contains(&dt) => document_types.push(dt),
                Ok(dt) => tracing::debug!(document_type = %dt, "duplicate document type ignored"),
                Err(_) => {
                    let err = GenerationError::UnsupportedDocumentType(raw.clone());
                    tracing::warn!(document_type = %raw, "unsupported document type");
                    failures.push(err.to_failure());
                }
            }
        }

        let _ = status.begin_analysis(document_types.clone());
        for failure in &failures {
            status.record_failure(failure.clone());
            record_failure_metric(failure);
        }
        self.publish(&status);

        let language = request.resolved_language(self.config.default_language);
        let profile = request.options.effective_profile(&profile);
        let output_format = request.options.output_format.unwrap_or(self.config.output_format);
        let jobs = document_types.iter().map(|dt| PipelineJob {
            request_id: self.request_id,
            document_type: *dt,
            profile: profile.clone(),
            language,
            options: request.options.clone(),
            output_format,
        });

        tracing::info!(
            company = %profile.company_name,
            industry = %profile.industry_type,
            %language,
            types = document_types.len(),
            unsupported = failures.len(),
            "generation request accepted"
        );

        let mut documents = self.run_batch(jobs.collect(), &mut status, &mut failures).await;

        let order = |label: &str| {
            request.document_types.iter().position(|raw| {
                raw == label
                    || raw.parse::<DocumentType>().is_ok_and(|dt| dt.as_str() == label)
            })
        };
        documents.sort_by_key(|d| document_types.iter().position(|dt| *dt == d.document_type));
        failures.sort_by_key(|f| f.document_type.as_deref().and_then(order));

        let outcome_label = if documents.is_empty() {
            let cause = failures.first().cloned().unwrap_or_else(|| DocumentFailure {
                kind: ErrorKind::ExecutionFailure,
                message: "no document was generated".to_string(),
                document_type: None,
            });
            let _ = status.fail(cause);
            "failed"
        } else {
            let _ = status.advance_to(GenerationState::Validating);
            let _ = status.complete();
            "completed"
        };
        metrics::counter!("pdoc_requests_total", "outcome" => outcome_label).increment(1);
        self.publish(&status);

        tracing::info!(
            state = %status.state,
            documents = documents.len(),
            failures = failures.len(),
            "generation request finished"
        );

        Ok(GenerationOutcome {
            request_id: self.request_id,
            documents,
            failures,
            status,
        })
    }

    /// Fail the request before any stage ran.
    fn reject(&self, status: &mut GenerationStatus, err: GenerationError) -> GenerationError {
        tracing::warn!(error = %err, "generation request rejected");
        let _ = status.fail(err.to_failure());
        metrics::counter!("pdoc_requests_total", "outcome" => "rejected").increment(1);
        self.publish(status);
        err
    }

    async fn run_batch(
        &self,
        jobs: Vec<PipelineJob>,
        status: &mut GenerationStatus,
        failures: &mut Vec<DocumentFailure>,
    ) -> Vec<GeneratedDocument> {
        let mut progress = BatchProgress::new(jobs.iter().map(|j| j.document_type));
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency.max(1)));
        let (events_tx, mut events_rx) = mpsc::unbounded_channel::<StageEvent>();
        let mut tasks = JoinSet::new();

        for job in jobs {
            let pipeline = self.pipeline.clone();
            let semaphore = semaphore.clone();
            let cancel = self.cancel.clone();
            let events = events_tx.clone();
            tasks.spawn(async move {
                let dt = job.document_type;
                let result = run_job(pipeline, semaphore, cancel, events, job).await;
                (dt, result)
            });
        }
        drop(events_tx);

        let mut documents = Vec::new();
        loop {
            tokio::select! {
                biased;
                Some(event) = events_rx.recv() => {
                    progress.reached(event.document_type, event.stage);
                }
                joined = tasks.join_next() => {
                    let Some(joined) = joined else { break };
                    match joined {
                        Ok((dt, Ok(doc))) => {
                            progress.finished(dt, true);
                            status.record_completed(dt);
                            metrics::counter!("pdoc_documents_generated_total").increment(1);
                            metrics::histogram!("pdoc_aggregate_compliance_score")
                                .record(doc.validation.aggregate_score.value());
                            documents.push(doc);
                        }
                        Ok((dt, Err(err))) => {
                            progress.finished(dt, false);
                            let failure = err.to_failure();
                            if !matches!(err, GenerationError::InternalInconsistency { .. }) {
                                tracing::warn!(document_type = %dt, error = %err, "document type failed");
                            }
                            record_failure_metric(&failure);
                            status.record_failure(failure.clone());
                            failures.push(failure);
                        }
                        Err(join_error) => {
                            tracing::error!(error = %join_error, "document task aborted");
                        }
                    }
                }
            }
            self.apply(&progress, status);
        }

        // Types whose task died without reporting back.
        for dt in progress.unfinished() {
            let err = GenerationError::ExecutionFailure {
                document_type: Some(dt),
                detail: "worker exited without a result".to_string(),
            };
            progress.finished(dt, false);
            let failure = err.to_failure();
            record_failure_metric(&failure);
            status.record_failure(failure.clone());
            failures.push(failure);
        }
        self.apply(&progress, status);
        documents
    }

    /// Fold batch progress into the status and publish a snapshot.
    fn apply(&self, progress: &BatchProgress, status: &mut GenerationStatus) {
        if let Some(target) = progress.request_state() {
            let _ = status.advance_to(target);
        }
        status.set_progress(progress.percent());
        self.publish(status);
    }

    fn publish(&self, status: &GenerationStatus) {
        self.status_tx.send_replace(status.clone());
    }
}

async fn run_job(
    pipeline: Arc<DocumentPipeline>,
    semaphore: Arc<Semaphore>,
    cancel: CancellationToken,
    events: mpsc::UnboundedSender<StageEvent>,
    job: PipelineJob,
) -> Result<GeneratedDocument, GenerationError> {
    let dt = job.document_type;
    let cancelled = GenerationError::Cancelled { document_type: dt };
    if cancel.is_cancelled() {
        return Err(cancelled);
    }
    let _permit = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(cancelled),
        permit = semaphore.acquire_owned() => match permit {
            Ok(permit) => permit,
            Err(closed) => {
                return Err(GenerationError::ExecutionFailure {
                    document_type: Some(dt),
                    detail: closed.to_string(),
                })
            }
        },
    };
    if cancel.is_cancelled() {
        return Err(cancelled);
    }

    tokio::task::spawn_blocking(move || {
        pipeline.run(&job, &mut |stage| {
            let _ = events.send(StageEvent {
                document_type: dt,
                stage,
            });
        })
    })
    .await
    .unwrap_or_else(|join_error| {
        Err(GenerationError::ExecutionFailure {
            document_type: Some(dt),
            detail: join_error.to_string(),
        })
    })
}

fn record_failure_metric(failure: &DocumentFailure) {
    metrics::counter!("pdoc_document_failures_total", "kind" => failure.kind.as_str()).increment(1);
}

// ─── Batch Progress ──────────────────────────────────────────────────

/// Stage units reached per document type.
///
/// A finished type counts all of its units, whether it succeeded or not,
/// so progress keeps moving when a type fails early. Failed types no longer
/// hold back the request state.
struct BatchProgress {
    reached: BTreeMap<DocumentType, usize>,
    failed: BTreeSet<DocumentType>,
    finished: BTreeSet<DocumentType>,
}

impl BatchProgress {
    fn new(types: impl IntoIterator<Item = DocumentType>) -> Self {
        Self {
            reached: types.into_iter().map(|dt| (dt, 0)).collect(),
            failed: BTreeSet::new(),
            finished: BTreeSet::new(),
        }
    }

    fn reached(&mut self, dt: DocumentType, stage: PipelineStage) {
        if let Some(units) = self.reached.get_mut(&dt) {
            *units = (*units).max(stage.units());
        }
    }

    fn finished(&mut self, dt: DocumentType, ok: bool) {
        if let Some(units) = self.reached.get_mut(&dt) {
            *units = PipelineStage::COUNT;
        }
        if !ok {
            self.failed.insert(dt);
        }
        self.finished.insert(dt);
    }

    fn unfinished(&self) -> Vec<DocumentType> {
        self.reached
            .keys()
            .filter(|dt| !self.finished.contains(dt))
            .copied()
            .collect()
    }

    fn percent(&self) -> u8 {
        let total = self.reached.len() * PipelineStage::COUNT;
        if total == 0 {
            return ACCEPTED_PROGRESS;
        }
        let done: usize = self.reached.values().sum();
        let percent = ACCEPTED_PROGRESS as usize + STAGE_PROGRESS_SPAN * done / total;
        u8::try_from(percent).unwrap_or(u8::MAX)
    }

    /// The request state every live type has reached, if any type is live.
    fn request_state(&self) -> Option<GenerationState> {
        let floor = self
            .reached
            .iter()
            .filter(|(dt, _)| !self.failed.contains(dt))
            .map(|(_, units)| *units)
            .min()?;
        Some(match floor {
            0 => GenerationState::Analyzing,
            1 => GenerationState::Generating,
            _ => GenerationState::Validating,
        })
    }
}
