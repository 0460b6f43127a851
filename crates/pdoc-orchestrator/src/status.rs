//! # Generation Status State Machine
//!
//! Progress record of one generation request. It is owned by the task that
//! runs the request; observers only ever see cloned snapshots.
//!
//! ## States
//!
//! ```text
//! Pending ──▶ Analyzing ──▶ Generating ──▶ Validating ──▶ Completed (terminal)
//!    │            │              │              │
//!    └────────────┴──────────────┴──────────────┴──────▶ Error (terminal)
//! ```
//!
//! ## Progress
//!
//! Progress is a percentage that never decreases. It is capped at 99 until
//! the request reaches `Completed`, which is the only state at 100.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pdoc_core::{DocumentType, RequestId, Timestamp};

use crate::error::DocumentFailure;

/// Progress reported as soon as a request is accepted.
pub const ACCEPTED_PROGRESS: u8 = 5;
/// Highest progress below completion.
pub const MAX_RUNNING_PROGRESS: u8 = 99;

// ─── Generation State ────────────────────────────────────────────────

/// The lifecycle state of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    /// Request received, nothing has run.
    Pending,
    /// Profile analysis and cultural adaptation are running.
    Analyzing,
    /// Content synthesis is running.
    Generating,
    /// Validation and scoring are running.
    Validating,
    /// At least one document was generated (terminal).
    Completed,
    /// The request failed as a whole (terminal).
    Error,
}

impl GenerationState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }

    /// The state that follows on success, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Analyzing),
            Self::Analyzing => Some(Self::Generating),
            Self::Generating => Some(Self::Validating),
            Self::Validating => Some(Self::Completed),
            Self::Completed | Self::Error => None,
        }
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Analyzing => "analyzing",
            Self::Generating => "generating",
            Self::Validating => "validating",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from illegal status transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// The transition is not valid from the current state.
    #[error("invalid generation transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: GenerationState,
        /// Attempted target state.
        to: GenerationState,
    },

    /// The request already reached a terminal state.
    #[error("generation is in terminal state {state}")]
    TerminalState {
        /// The terminal state.
        state: GenerationState,
    },
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of one state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State before the transition.
    pub from_state: GenerationState,
    /// State after the transition.
    pub to_state: GenerationState,
    /// When the transition happened.
    pub timestamp: Timestamp,
    /// Why it happened.
    pub reason: String,
}

// ─── Generation Status ───────────────────────────────────────────────

/// Progress record of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStatus {
    /// The request this status belongs to.
    pub request_id: RequestId,
    /// Current state.
    pub state: GenerationState,
    /// Percentage in `0..=100`, never decreasing.
    pub progress: u8,
    /// Current activity.
    pub message: String,
    /// Document types accepted for generation.
    pub document_types: Vec<DocumentType>,
    /// Document types that finished successfully, in completion order.
    pub completed: Vec<DocumentType>,
    /// Per-type failures recorded so far.
    pub failures: Vec<DocumentFailure>,
    /// Cause of the `Error` state.
    pub error: Option<DocumentFailure>,
    /// When the request was received.
    pub started_at: Timestamp,
    /// When this record last changed.
    pub updated_at: Timestamp,
    /// Ordered log of state transitions.
    pub transitions: Vec<TransitionRecord>,
}

impl GenerationStatus {
    /// A fresh `Pending` status.
    pub fn new(request_id: RequestId) -> Self {
        let now = Timestamp::now();
        Self {
            request_id,
            state: GenerationState::Pending,
            progress: 0,
            message: "request received".to_string(),
            document_types: Vec::new(),
            completed: Vec::new(),
            failures: Vec::new(),
            error: None,
            started_at: now,
            updated_at: now,
            transitions: Vec::new(),
        }
    }

    /// Accept the request (`Pending → Analyzing`).
    pub fn begin_analysis(&mut self, document_types: Vec<DocumentType>) -> Result<(), StatusError> {
        self.require_state(GenerationState::Pending, GenerationState::Analyzing)?;
        self.document_types = document_types;
        self.do_transition(GenerationState::Analyzing, "request accepted");
        self.set_progress(ACCEPTED_PROGRESS);
        Ok(())
    }

    /// Every live document type is analyzed (`Analyzing → Generating`).
    pub fn begin_generation(&mut self) -> Result<(), StatusError> {
        self.require_state(GenerationState::Analyzing, GenerationState::Generating)?;
        self.do_transition(GenerationState::Generating, "profile analysis finished");
        Ok(())
    }

    /// Every live document type has content (`Generating → Validating`).
    pub fn begin_validation(&mut self) -> Result<(), StatusError> {
        self.require_state(GenerationState::Generating, GenerationState::Validating)?;
        self.do_transition(GenerationState::Validating, "content synthesized");
        Ok(())
    }

    /// Every live document type is validated and scored (`Validating → Completed`).
    pub fn complete(&mut self) -> Result<(), StatusError> {
        self.require_state(GenerationState::Validating, GenerationState::Completed)?;
        self.do_transition(GenerationState::Completed, "documents generated");
        self.progress = 100;
        Ok(())
    }

    /// Fail the request from any non-terminal state.
    pub fn fail(&mut self, cause: DocumentFailure) -> Result<(), StatusError> {
        if self.state.is_terminal() {
            return Err(StatusError::TerminalState { state: self.state });
        }
        let reason = cause.message.clone();
        self.error = Some(cause);
        self.do_transition(GenerationState::Error, &reason);
        Ok(())
    }

    /// Step forward along the success path until `target` is reached.
    /// `Completed` is never entered this way.
    pub fn advance_to(&mut self, target: GenerationState) -> Result<(), StatusError> {
        while self.state < target {
            match self.state {
                GenerationState::Pending => {
                    let types = std::mem::take(&mut self.document_types);
                    self.begin_analysis(types)?
                }
                GenerationState::Analyzing => self.begin_generation()?,
                GenerationState::Generating => self.begin_validation()?,
                GenerationState::Validating | GenerationState::Completed | GenerationState::Error => {
                    break
                }
            }
        }
        Ok(())
    }

    /// Raise progress to `progress`, capped at 99 before completion.
    /// Lower values are ignored.
    pub fn set_progress(&mut self, progress: u8) {
        if self.state == GenerationState::Completed {
            return;
        }
        let capped = progress.min(MAX_RUNNING_PROGRESS);
        if capped > self.progress {
            self.progress = capped;
            self.updated_at = Timestamp::now();
        }
    }

    /// Record a finished document type.
    pub fn record_completed(&mut self, document_type: DocumentType) {
        self.completed.push(document_type);
        self.message = format!("{document_type} generated");
        self.updated_at = Timestamp::now();
    }

    /// Record a per-type failure.
    pub fn record_failure(&mut self, failure: DocumentFailure) {
        self.message = failure.message.clone();
        self.failures.push(failure);
        self.updated_at = Timestamp::now();
    }

    /// Whether the request reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    fn require_state(
        &self,
        expected: GenerationState,
        target: GenerationState,
    ) -> Result<(), StatusError> {
        if self.state.is_terminal() {
            return Err(StatusError::TerminalState { state: self.state });
        }
        if self.state != expected {
            return Err(StatusError::InvalidTransition {
                from: self.state,
                to: target,
            });
        }
        Ok(())
    }

    fn do_transition(&mut self, to: GenerationState, reason: &str) {
        let now = Timestamp::now();
        self.transitions.push(TransitionRecord {
            from_state: self.state,
            to_state: to,
            timestamp: now,
            reason: reason.to_string(),
        });
        self.state = to;
        self.message = reason.to_string();
        self.updated_at = now;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
