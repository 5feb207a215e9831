// =============================================================================
// Next Frame Web - Forms API
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. Outcomes
// 4. Transport Trait
// 5. Transport Selection
// =============================================================================

pub mod encoding;
pub mod lenient;
pub mod netlify;

pub use encoding::{url_encode, Encoding, URL_ENCODED};
pub use lenient::LenientTransport;
pub use netlify::NetlifyTransport;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{SiteConfig, TransportMode};
use crate::submission::{Attachment, Submission};

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// Submission error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Forms backend rejected the submission: HTTP {status}")]
    Rejected { status: u16 },

    #[error("Could not encode submission: {0}")]
    Encode(String),

    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("This form has already been submitted")]
    AlreadySubmitted,

    #[error("This form cannot be reset after submission")]
    ResetNotAllowed,
}

// -----------------------------------------------------------------------------
// 3. Outcomes
// -----------------------------------------------------------------------------

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Pending,
    Success,
    /// The backend answered with a non-success status.
    RemoteRejection { status: u16 },
    /// The request never completed.
    NetworkFailure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

impl From<Result<(), SubmitError>> for SubmissionOutcome {
    fn from(result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Success,
            Err(SubmitError::Rejected { status }) => SubmissionOutcome::RemoteRejection { status },
            Err(e) => SubmissionOutcome::NetworkFailure(e.to_string()),
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Transport Trait
// -----------------------------------------------------------------------------

/// Delivers a submission to the forms backend.
#[async_trait(?Send)]
pub trait Transport<F: Attachment>: Send + Sync {
    /// Transport name for logging.
    fn name(&self) -> &str;

    /// Send one submission. No retries.
    async fn send(&self, submission: &Submission<F>) -> Result<(), SubmitError>;
}

/// Send a submission and fold the result into an outcome. Never fails.
pub async fn deliver<F, T>(transport: &T, submission: &Submission<F>) -> SubmissionOutcome
where
    F: Attachment,
    T: Transport<F> + ?Sized,
{
    log::info!(
        "submitting {} via {} ({} fields, {} attachments, {:?})",
        submission.kind.form_name(),
        transport.name(),
        submission.record.len(),
        submission.attachments.len(),
        Encoding::for_submission(submission),
    );

    let outcome = SubmissionOutcome::from(transport.send(submission).await);
    if outcome.is_success() {
        log::info!("{} delivered", submission.kind.form_name());
    } else {
        log::warn!("{} not delivered: {outcome:?}", submission.kind.form_name());
    }
    outcome
}

// -----------------------------------------------------------------------------
// 5. Transport Selection
// -----------------------------------------------------------------------------

/// Transport used by the site forms.
pub type SiteTransport = Arc<dyn Transport<web_sys::File>>;

/// Pick the transport for this build. Chosen once at startup.
pub fn transport_for(config: &SiteConfig) -> SiteTransport {
    let live = NetlifyTransport::new(config.forms_endpoint.clone());
    match config.transport_mode {
        TransportMode::Live => Arc::new(live),
        TransportMode::Diagnostic => {
            log::warn!("diagnostic mode: failed submissions will be reported as delivered");
            Arc::new(LenientTransport::new(live))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(SubmissionOutcome::from(Ok(())), SubmissionOutcome::Success);
        assert_eq!(
            SubmissionOutcome::from(Err(SubmitError::Rejected { status: 422 })),
            SubmissionOutcome::RemoteRejection { status: 422 }
        );
        assert!(matches!(
            SubmissionOutcome::from(Err(SubmitError::Network("dns".into()))),
            SubmissionOutcome::NetworkFailure(msg) if msg.contains("dns")
        ));
        assert!(matches!(
            SubmissionOutcome::from(Err(SubmitError::Encode("bad blob".into()))),
            SubmissionOutcome::NetworkFailure(_)
        ));
    }

    #[test]
    fn test_transport_follows_config() {
        let live = transport_for(&SiteConfig::resolve(Some("production"), None, None));
        assert_eq!(live.name(), "netlify");

        let diagnostic = transport_for(&SiteConfig::resolve(Some("development"), None, None));
        assert_eq!(diagnostic.name(), "lenient");
    }
}
