// =============================================================================
// Next Frame Web - Form Components
// =============================================================================
// Table of Contents:
// 1. Field Store
// 2. TextInput
// 3. TextArea
// 4. Select
// 5. Honeypot
// 6. SubmitButton
// 7. Submission
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::{deliver, SiteTransport};
use crate::components::InlineLoader;
use crate::services::toast::Toaster;
use crate::submission::{FormController, FormKind, SubmissionRecord, HONEYPOT_FIELD};

// -----------------------------------------------------------------------------
// 1. Field Store
// -----------------------------------------------------------------------------

/// One signal per named input of a form.
#[derive(Clone, Copy)]
pub struct FormFields {
    kind: FormKind,
    values: StoredValue<Vec<(&'static str, RwSignal<String>)>>,
}

impl FormFields {
    pub fn new(kind: FormKind) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|spec| (spec.name, RwSignal::new(String::new())))
            .collect();
        Self {
            kind,
            values: StoredValue::new(values),
        }
    }

    /// Signal bound to the input called `name`.
    pub fn value(&self, name: &str) -> RwSignal<String> {
        let found = self
            .values
            .with_value(|values| values.iter().find(|(n, _)| *n == name).map(|(_, s)| *s));
        found.unwrap_or_else(|| {
            log::error!("{} has no field named {name}", self.kind.form_name());
            RwSignal::new(String::new())
        })
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.kind.field(name).map(|f| f.required).unwrap_or(false)
    }

    /// Snapshot the current values as a submission record.
    pub fn record(&self) -> SubmissionRecord {
        self.values.with_value(|values| {
            SubmissionRecord::collect(self.kind, |name| {
                values
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, signal)| signal.get_untracked())
            })
        })
    }

    /// Clear every input.
    pub fn reset(&self) {
        self.values.with_value(|values| {
            for (_, signal) in values {
                signal.set(String::new());
            }
        });
    }
}

// -----------------------------------------------------------------------------
// 2. TextInput
// -----------------------------------------------------------------------------

/// Labelled text input bound to a form field.
#[component]
pub fn TextInput(
    fields: FormFields,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional, into)] max: Option<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let id = id.unwrap_or_else(|| name.to_string());
    let required = fields.is_required(name);
    let value = fields.value(name);

    view! {
        <div class="form-field">
            <label class="form-label" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class="form-input"
                placeholder=placeholder
                min=min
                max=max
                required=required
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area bound to a form field.
#[component]
pub fn TextArea(
    fields: FormFields,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };
    let id = id.unwrap_or_else(|| name.to_string());
    let required = fields.is_required(name);
    let value = fields.value(name);

    view! {
        <div class="form-field">
            <label class="form-label" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <textarea
                id=id
                name=name
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Select
// -----------------------------------------------------------------------------

/// Select dropdown option.
#[derive(Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Select dropdown bound to a form field.
#[component]
pub fn Select(
    fields: FormFields,
    name: &'static str,
    #[prop(into)] label: String,
    options: Vec<SelectOption>,
) -> impl IntoView {
    let value = fields.value(name);

    view! {
        <div class="form-field">
            <label class="form-label" for=name>{label}</label>
            <select
                id=name
                name=name
                class="form-select"
                prop:value=move || value.get()
                on:change=move |e| value.set(event_target_value(&e))
            >
                {options
                    .into_iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 5. Honeypot
// -----------------------------------------------------------------------------

/// Hidden input that only bots fill in. The backend discards those.
#[component]
pub fn HoneypotField(fields: FormFields) -> impl IntoView {
    let value = fields.value(HONEYPOT_FIELD);

    view! {
        <p class="hidden" aria-hidden="true">
            <label>
                "Don't fill this out if you're human: "
                <input
                    name=HONEYPOT_FIELD
                    tabindex="-1"
                    autocomplete="off"
                    prop:value=move || value.get()
                    on:input=move |e| value.set(event_target_value(&e))
                />
            </label>
        </p>
    }
}

// -----------------------------------------------------------------------------
// 6. SubmitButton
// -----------------------------------------------------------------------------

/// Submit button that disables itself and shows a spinner while busy.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary btn-block" disabled=move || busy.get()>
            {move || if busy.get() {
                view! { <InlineLoader /> <span>{busy_label.clone()}</span> }.into_any()
            } else {
                view! { <span>{label.clone()}</span> }.into_any()
            }}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 7. Submission
// -----------------------------------------------------------------------------

/// Run one submission for a page form.
///
/// A trigger while a request is in flight is dropped by the controller. If
/// the page is left mid-request the outcome is discarded.
pub fn submit_form(
    controller: RwSignal<FormController<File>, LocalStorage>,
    fields: FormFields,
    transport: SiteTransport,
    toaster: Toaster,
) {
    let record = fields.record();
    let submission = match controller.try_update(|c| c.begin(record)) {
        Some(Ok(submission)) => submission,
        Some(Err(e)) => {
            log::debug!("submit ignored: {e}");
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let outcome = deliver(transport.as_ref(), &submission).await;
        let Some(settlement) = controller.try_update(|c| c.settle(&outcome)) else {
            return;
        };
        if settlement.reset_fields {
            fields.reset();
        }
        if let Some(notice) = settlement.notice {
            toaster.push(notice);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_then_reset_clears_every_field() {
        let owner = Owner::new();
        owner.with(|| {
            let fields = FormFields::new(FormKind::Contact);
            fields.value("name").set("Asha Rao".to_string());
            fields.value("email").set("asha@example.com".to_string());
            fields.value("message").set("Looking for two actors".to_string());

            let record = fields.record();
            let pairs: Vec<(&str, &str)> = record.iter().collect();
            assert_eq!(
                pairs,
                [
                    ("form-name", "contact-form"),
                    ("bot-field", ""),
                    ("name", "Asha Rao"),
                    ("email", "asha@example.com"),
                    ("message", "Looking for two actors"),
                ]
            );

            fields.reset();
            let cleared = fields.record();
            for (name, value) in cleared.iter() {
                if name == "form-name" {
                    assert_eq!(value, "contact-form");
                } else {
                    assert_eq!(value, "", "{name} not cleared");
                }
            }
        });
    }

    #[test]
    fn test_required_flags_follow_schema() {
        let owner = Owner::new();
        owner.with(|| {
            let fields = FormFields::new(FormKind::Profile);
            assert!(fields.is_required("fullName"));
            assert!(!fields.is_required("videoLink"));
            assert!(!fields.is_required("unknown"));
        });
    }
}
