// =============================================================================
// Next Frame Web - Submission Encoding
// =============================================================================

use crate::submission::{Submission, SubmissionRecord};

pub const URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// Body encoding for a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// `application/x-www-form-urlencoded`, fields only.
    UrlEncoded,
    /// `multipart/form-data`; the runtime sets the boundary header.
    Multipart,
}

impl Encoding {
    /// Multipart only when there are files to carry.
    pub fn for_submission<F>(submission: &Submission<F>) -> Self {
        if submission.has_attachments() {
            Encoding::Multipart
        } else {
            Encoding::UrlEncoded
        }
    }
}

fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

/// Serialize a record as a form body, preserving field order.
pub fn url_encode(record: &SubmissionRecord) -> String {
    record
        .iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::attachments::tests::photo;
    use crate::submission::FormKind;

    #[test]
    fn test_url_encode_keeps_order_and_escapes() {
        let mut record = SubmissionRecord::default();
        record.push("form-name", "contact-form");
        record.push("name", "Asha Rao");
        record.push("message", "Rates & dates = ?");

        assert_eq!(
            url_encode(&record),
            "form-name=contact-form&name=Asha+Rao&message=Rates+%26+dates+%3D+%3F"
        );
    }

    #[test]
    fn test_url_encode_plus_and_unicode() {
        let mut record = SubmissionRecord::default();
        record.push("languages", "Hindi+Tamil");
        record.push("city", "Mumbaí");

        assert_eq!(url_encode(&record), "languages=Hindi%2BTamil&city=Mumba%C3%AD");
    }

    #[test]
    fn test_empty_record_encodes_empty_body() {
        assert_eq!(url_encode(&SubmissionRecord::default()), "");
    }

    #[test]
    fn test_encoding_depends_on_attachments() {
        let mut submission = Submission {
            kind: FormKind::Profile,
            record: SubmissionRecord::default(),
            attachments: Vec::new(),
        };
        assert_eq!(Encoding::for_submission(&submission), Encoding::UrlEncoded);

        submission.attachments.push(photo("headshot.jpg", 1_000));
        assert_eq!(Encoding::for_submission(&submission), Encoding::Multipart);
    }
}
