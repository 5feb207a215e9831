// =============================================================================
// Next Frame Web - Submission Form Controller
// =============================================================================
// Table of Contents:
// 1. Phases
// 2. Settlement
// 3. Controller
// =============================================================================
// Idle -> Submitting -> Submitted          (success)
//                    -> Idle + toast       (rejection / network failure)
// Submitted -> Idle only for forms that allow sending another.
// =============================================================================

use super::attachments::{Attachment, AttachmentSet};
use super::{FormKind, Submission, SubmissionRecord};
use crate::api::{SubmissionOutcome, SubmitError};
use crate::services::toast::Notice;

// -----------------------------------------------------------------------------
// 1. Phases
// -----------------------------------------------------------------------------

/// Which view a form shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Editable form, submit enabled.
    #[default]
    Idle,
    /// Request in flight; submit disabled and showing a busy indicator.
    Submitting,
    /// Confirmation panel replaces the form.
    Submitted,
}

// -----------------------------------------------------------------------------
// 2. Settlement
// -----------------------------------------------------------------------------

/// What the page must do once an outcome is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub notice: Option<Notice>,
    /// Clear every field value.
    pub reset_fields: bool,
}

const REJECTED_HINT: &str = "Please try again in a moment.";
const NETWORK_HINT: &str = "Please check your connection and try again.";

// -----------------------------------------------------------------------------
// 3. Controller
// -----------------------------------------------------------------------------

/// Per-page submission state for one form.
#[derive(Clone, Debug)]
pub struct FormController<F> {
    kind: FormKind,
    phase: FormPhase,
    attachments: AttachmentSet<F>,
}

impl<F: Attachment> FormController<F> {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            phase: FormPhase::Idle,
            attachments: AttachmentSet::new(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn attachments(&self) -> &AttachmentSet<F> {
        &self.attachments
    }

    /// Add picked or dropped files. Forms without attachments ignore them.
    pub fn add_attachments<I>(&mut self, incoming: I) -> Option<Notice>
    where
        I: IntoIterator<Item = F>,
    {
        if !self.kind.accepts_attachments() {
            return None;
        }
        self.attachments.add(incoming)
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<F> {
        self.attachments.remove(index)
    }

    /// Enter `Submitting` and build the payload for the transport.
    ///
    /// Fails while a request is in flight or after a terminal success, so a
    /// second trigger never produces a second request.
    pub fn begin(&mut self, record: SubmissionRecord) -> Result<Submission<F>, SubmitError> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitError::AlreadySubmitting),
            FormPhase::Submitted => return Err(SubmitError::AlreadySubmitted),
            FormPhase::Idle => {}
        }

        self.phase = FormPhase::Submitting;
        Ok(Submission {
            kind: self.kind,
            record,
            attachments: self.attachments.to_vec(),
        })
    }

    /// Apply the transport outcome and leave `Submitting`.
    pub fn settle(&mut self, outcome: &SubmissionOutcome) -> Settlement {
        if self.phase != FormPhase::Submitting {
            log::warn!(
                "{}: ignoring outcome {outcome:?} while {:?}",
                self.kind.form_name(),
                self.phase
            );
            return Settlement::default();
        }

        match outcome {
            SubmissionOutcome::Pending => {
                // Every settle leaves Submitting.
                log::warn!("{}: settled without a result", self.kind.form_name());
                self.phase = FormPhase::Idle;
                Settlement::default()
            }
            SubmissionOutcome::Success => {
                self.phase = FormPhase::Submitted;
                self.attachments.clear();
                Settlement {
                    notice: self.kind.success_notice(),
                    reset_fields: true,
                }
            }
            SubmissionOutcome::RemoteRejection { .. } => self.fail(REJECTED_HINT),
            SubmissionOutcome::NetworkFailure(_) => self.fail(NETWORK_HINT),
        }
    }

    fn fail(&mut self, hint: &str) -> Settlement {
        self.phase = FormPhase::Idle;
        Settlement {
            notice: Some(Notice::destructive(self.kind.failure_title(), hint)),
            reset_fields: false,
        }
    }

    /// Return from the confirmation panel to an empty form.
    pub fn send_another(&mut self) -> Result<(), SubmitError> {
        if !self.kind.allows_send_another() {
            return Err(SubmitError::ResetNotAllowed);
        }
        if self.phase == FormPhase::Submitted {
            self.phase = FormPhase::Idle;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{deliver, Transport};
    use crate::submission::attachments::tests::{photo, FakeFile};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport that answers with a fixed result and counts requests.
    struct ScriptedTransport {
        result: Result<(), SubmitError>,
        sent: AtomicUsize,
    }

    impl ScriptedTransport {
        fn new(result: Result<(), SubmitError>) -> Self {
            Self { result, sent: AtomicUsize::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl Transport<FakeFile> for ScriptedTransport {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn send(&self, _submission: &Submission<FakeFile>) -> Result<(), SubmitError> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn contact_record() -> SubmissionRecord {
        SubmissionRecord::collect(FormKind::Contact, |name| match name {
            "name" => Some("Asha".to_string()),
            "email" => Some("asha@example.com".to_string()),
            "message" => Some("Hello".to_string()),
            _ => None,
        })
    }

    #[test]
    fn test_successful_contact_submission() {
        let transport = ScriptedTransport::new(Ok(()));
        let mut controller = FormController::<FakeFile>::new(FormKind::Contact);

        let settlement = block_on(async {
            let submission = controller.begin(contact_record())?;
            assert!(controller.is_submitting());
            let outcome = deliver(&transport, &submission).await;
            Ok::<_, SubmitError>(controller.settle(&outcome))
        })
        .unwrap();

        assert_eq!(controller.phase(), FormPhase::Submitted);
        assert!(settlement.reset_fields);
        assert!(controller.attachments().is_empty());
        assert_eq!(settlement.notice.map(|n| n.title), Some("Message sent!".to_string()));
    }

    #[test]
    fn test_network_failure_keeps_form_editable() {
        let transport = ScriptedTransport::new(Err(SubmitError::Network("offline".into())));
        let mut controller = FormController::<FakeFile>::new(FormKind::Contact);

        let submission = controller.begin(contact_record()).unwrap();
        let outcome = block_on(deliver(&transport, &submission));
        let settlement = controller.settle(&outcome);

        assert_eq!(controller.phase(), FormPhase::Idle);
        assert!(!settlement.reset_fields);
        let notice = settlement.notice.unwrap();
        assert!(notice.is_destructive());
        assert_eq!(notice.description, NETWORK_HINT);
        assert_eq!(submission.record.get("name"), Some("Asha"));
    }

    #[test]
    fn test_rejection_uses_retry_hint() {
        let transport = ScriptedTransport::new(Err(SubmitError::Rejected { status: 500 }));
        let mut controller = FormController::<FakeFile>::new(FormKind::Profile);
        controller.add_attachments(vec![photo("headshot.jpg", 1_000)]);

        let submission = controller.begin(SubmissionRecord::collect(FormKind::Profile, |_| None)).unwrap();
        let outcome = block_on(deliver(&transport, &submission));
        assert_eq!(outcome, SubmissionOutcome::RemoteRejection { status: 500 });

        let settlement = controller.settle(&outcome);
        let notice = settlement.notice.unwrap();
        assert_eq!(notice.title, "Submission failed");
        assert_eq!(notice.description, REJECTED_HINT);
        // Photos survive for the retry.
        assert_eq!(controller.attachments().len(), 1);
    }

    #[test]
    fn test_second_trigger_does_not_send_twice() {
        let transport = ScriptedTransport::new(Ok(()));
        let mut controller = FormController::<FakeFile>::new(FormKind::Contact);

        let first = controller.begin(contact_record());
        let second = controller.begin(contact_record());

        assert!(first.is_ok());
        assert_eq!(second.unwrap_err(), SubmitError::AlreadySubmitting);

        if let Ok(submission) = first {
            block_on(deliver(&transport, &submission));
        }
        assert_eq!(transport.sent.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_profile_success_is_terminal() {
        let mut controller = FormController::<FakeFile>::new(FormKind::Profile);
        controller.add_attachments(vec![photo("a.jpg", 10), photo("b.jpg", 10)]);

        let submission = controller.begin(SubmissionRecord::collect(FormKind::Profile, |_| None)).unwrap();
        assert_eq!(submission.attachments.len(), 2);

        let settlement = controller.settle(&SubmissionOutcome::Success);
        assert!(settlement.notice.is_none());
        assert!(controller.attachments().is_empty());

        assert_eq!(controller.send_another(), Err(SubmitError::ResetNotAllowed));
        assert_eq!(
            controller.begin(SubmissionRecord::default()).unwrap_err(),
            SubmitError::AlreadySubmitted
        );
    }

    #[test]
    fn test_contact_can_send_another() {
        let mut controller = FormController::<FakeFile>::new(FormKind::Contact);
        controller.begin(contact_record()).unwrap();
        controller.settle(&SubmissionOutcome::Success);

        controller.send_another().unwrap();

        assert_eq!(controller.phase(), FormPhase::Idle);
        assert!(controller.begin(contact_record()).is_ok());
    }

    #[test]
    fn test_contact_ignores_attachments() {
        let mut controller = FormController::<FakeFile>::new(FormKind::Contact);
        assert!(controller.add_attachments(vec![photo("a.jpg", 10)]).is_none());
        assert!(controller.attachments().is_empty());
    }

    #[test]
    fn test_stray_outcome_changes_nothing() {
        let mut controller = FormController::<FakeFile>::new(FormKind::Contact);
        assert_eq!(controller.settle(&SubmissionOutcome::Success), Settlement::default());
        assert_eq!(controller.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_pending_settle_clears_busy_state() {
        let mut controller = FormController::<FakeFile>::new(FormKind::Contact);
        controller.begin(contact_record()).unwrap();

        assert_eq!(controller.settle(&SubmissionOutcome::Pending), Settlement::default());
        assert!(!controller.is_submitting());
        assert_eq!(controller.phase(), FormPhase::Idle);

        // The form can be submitted again
        assert!(controller.begin(contact_record()).is_ok());
    }
}
