// =============================================================================
// Next Frame Web - Form Submissions
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Form Kinds & Field Schemas
// 3. Submission Record (Field Collector)
// 4. Submission Payload
// =============================================================================

pub mod attachments;
pub mod controller;

pub use attachments::{normalize, Attachment, AttachmentSet, Normalized};
pub use controller::{FormController, FormPhase, Settlement};

use serde::Serialize;

use crate::services::toast::Notice;

/// Hidden discriminator the forms backend uses to route a submission.
pub const FORM_NAME_FIELD: &str = "form-name";

/// Honeypot input; humans never see it, bots tend to fill it in.
pub const HONEYPOT_FIELD: &str = "bot-field";

/// Multipart part name for attached photos.
pub const PHOTOS_FIELD: &str = "photos";

// -----------------------------------------------------------------------------
// 2. Form Kinds & Field Schemas
// -----------------------------------------------------------------------------

/// A named input on one of the site forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
}

const fn field(name: &'static str) -> FieldSpec {
    FieldSpec { name, required: false }
}

const fn required(name: &'static str) -> FieldSpec {
    FieldSpec { name, required: true }
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    field(HONEYPOT_FIELD),
    required("name"),
    required("email"),
    required("message"),
];

const PROFILE_FIELDS: &[FieldSpec] = &[
    field(HONEYPOT_FIELD),
    required("fullName"),
    field("age"),
    field("gender"),
    field("height"),
    field("city"),
    required("phone"),
    required("email"),
    field("languages"),
    field("experienceLevel"),
    field("videoLink"),
    field("message"),
];

/// The two forms the site submits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FormKind {
    /// General inquiries from the contact page.
    Contact,
    /// Talent profiles, optionally with photos.
    Profile,
}

impl FormKind {
    /// Name registered with the forms backend.
    pub fn form_name(self) -> &'static str {
        match self {
            FormKind::Contact => "contact-form",
            FormKind::Profile => "actor-submissions",
        }
    }

    /// Named inputs in control order, after the `form-name` discriminator.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::Profile => PROFILE_FIELDS,
        }
    }

    pub fn field(self, name: &str) -> Option<FieldSpec> {
        self.fields().iter().copied().find(|f| f.name == name)
    }

    pub fn accepts_attachments(self) -> bool {
        matches!(self, FormKind::Profile)
    }

    /// Whether the confirmation view offers a way back to an empty form.
    pub fn allows_send_another(self) -> bool {
        matches!(self, FormKind::Contact)
    }

    /// Toast shown alongside the confirmation view, if any.
    pub fn success_notice(self) -> Option<Notice> {
        match self {
            FormKind::Contact => Some(Notice::new(
                "Message sent!",
                "Thank you for reaching out. We'll get back to you soon.",
            )),
            FormKind::Profile => None,
        }
    }

    pub fn failure_title(self) -> &'static str {
        match self {
            FormKind::Contact => "Message not sent",
            FormKind::Profile => "Submission failed",
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Submission Record (Field Collector)
// -----------------------------------------------------------------------------

/// Ordered field name/value pairs for one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    fields: Vec<(String, String)>,
}

impl SubmissionRecord {
    /// Collect every named input of `kind` in control order.
    ///
    /// `value_of` reads the current control value; controls that report
    /// nothing are sent empty, as a native form would.
    pub fn collect<V>(kind: FormKind, mut value_of: V) -> Self
    where
        V: FnMut(&str) -> Option<String>,
    {
        let mut record = Self::default();
        record.push(FORM_NAME_FIELD, kind.form_name());
        for spec in kind.fields() {
            record.push(spec.name, value_of(spec.name).unwrap_or_default());
        }
        record
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn form_name(&self) -> Option<&str> {
        self.get(FORM_NAME_FIELD)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// -----------------------------------------------------------------------------
// 4. Submission Payload
// -----------------------------------------------------------------------------

/// Everything handed to a transport for one attempt.
#[derive(Clone, Debug)]
pub struct Submission<F> {
    pub kind: FormKind,
    pub record: SubmissionRecord,
    pub attachments: Vec<F>,
}

impl<F> Submission<F> {
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}
