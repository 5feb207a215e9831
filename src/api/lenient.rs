// =============================================================================
// Next Frame Web - Diagnostic Transport
// =============================================================================
// Wraps a real transport and reports every attempt as delivered. Only
// selected when `SiteConfig` resolves to diagnostic mode, which production
// builds refuse.
// =============================================================================

use async_trait::async_trait;

use super::{SubmitError, Transport};
use crate::submission::{Attachment, Submission};

/// Forwards to `inner`, then swallows rejections and network failures.
pub struct LenientTransport<T> {
    inner: T,
}

impl<T> LenientTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait(?Send)]
impl<F, T> Transport<F> for LenientTransport<T>
where
    F: Attachment,
    T: Transport<F>,
{
    fn name(&self) -> &str {
        "lenient"
    }

    async fn send(&self, submission: &Submission<F>) -> Result<(), SubmitError> {
        if let Err(e) = self.inner.send(submission).await {
            log::warn!(
                "diagnostic mode: treating failed {} submission via {} as delivered ({e})",
                submission.kind.form_name(),
                self.inner.name(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{deliver, SubmissionOutcome};
    use crate::submission::attachments::tests::FakeFile;
    use crate::submission::{FormKind, SubmissionRecord};
    use futures::executor::block_on;

    struct Failing(SubmitError);

    #[async_trait(?Send)]
    impl Transport<FakeFile> for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn send(&self, _submission: &Submission<FakeFile>) -> Result<(), SubmitError> {
            Err(self.0.clone())
        }
    }

    fn submission() -> Submission<FakeFile> {
        Submission {
            kind: FormKind::Contact,
            record: SubmissionRecord::collect(FormKind::Contact, |_| None),
            attachments: Vec::new(),
        }
    }

    #[test]
    fn test_coerces_failures_to_success() {
        for error in [
            SubmitError::Rejected { status: 404 },
            SubmitError::Network("connection refused".into()),
        ] {
            let transport = LenientTransport::new(Failing(error));
            let outcome = block_on(deliver(&transport, &submission()));
            assert_eq!(outcome, SubmissionOutcome::Success);
        }
    }

    #[test]
    fn test_real_transport_reports_failure() {
        let outcome = block_on(deliver(&Failing(SubmitError::Rejected { status: 404 }), &submission()));
        assert_eq!(outcome, SubmissionOutcome::RemoteRejection { status: 404 });
    }
}
