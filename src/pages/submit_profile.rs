// =============================================================================
// Next Frame Web - Submit Profile Page
// =============================================================================
// Talent submission form. A successful submission replaces the whole page
// with a thank-you view for the rest of the visit.
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use web_sys::File;

use crate::components::{
    submit_form, FormFields, HoneypotField, PageHero, PhotoPicker, Select, SelectOption, SubmitButton,
    TextArea, TextInput,
};
use crate::services::toast::use_toaster;
use crate::state::use_app_state;
use crate::submission::{FormController, FormKind};

fn experience_options() -> Vec<SelectOption> {
    vec![
        SelectOption { value: "", label: "Select experience level" },
        SelectOption { value: "fresher", label: "Fresher" },
        SelectOption { value: "experienced", label: "Experienced" },
    ]
}

/// Profile submission page.
#[component]
pub fn SubmitProfilePage() -> impl IntoView {
    let app_state = use_app_state();
    let toaster = use_toaster();

    let kind = FormKind::Profile;
    let fields = FormFields::new(kind);
    let controller = RwSignal::new_local(FormController::<File>::new(kind));
    let transport = StoredValue::new(app_state.transport);

    let submitted = move || controller.with(|c| c.is_submitted());
    let busy = Signal::derive(move || controller.with(|c| c.is_submitting()));

    view! {
        <Title text="Submit Profile | Next Frame Casting" />
        <Show
            when=submitted
            fallback=move || view! {
                <div class="page page-submit">
                    <PageHero
                        tag="Join Our Database"
                        title="Submit Your Profile"
                        subtitle="Submit your details to be considered for upcoming casting opportunities across films, ads, and digital content."
                    />

                    <section class="section-padding">
                        <div class="container-narrow fade-in-up">
                            <form
                                name=kind.form_name()
                                method="POST"
                                enctype="multipart/form-data"
                                data-netlify="true"
                                netlify-honeypot="bot-field"
                                class="form-stack"
                                on:submit=move |ev| {
                                    ev.prevent_default();
                                    submit_form(controller, fields, transport.get_value(), toaster);
                                }
                            >
                                <input type="hidden" name="form-name" value=kind.form_name() />
                                <HoneypotField fields=fields />

                                // Personal
                                <fieldset class="form-section">
                                    <h2 class="form-section-title">"Personal Information"</h2>
                                    <div class="form-grid">
                                        <TextInput fields=fields name="fullName" label="Full Name" placeholder="Enter your full name" />
                                        <TextInput
                                            fields=fields
                                            name="age"
                                            label="Age"
                                            input_type="number"
                                            min="1"
                                            max="100"
                                            placeholder="Your age"
                                        />
                                        <TextInput fields=fields name="gender" label="Gender" placeholder="Gender (optional)" />
                                        <TextInput fields=fields name="height" label="Height" placeholder="e.g., 5'8\" or 173 cm" />
                                    </div>
                                    <TextInput fields=fields name="city" label="City" placeholder="Current city" />
                                </fieldset>

                                // Contact
                                <fieldset class="form-section">
                                    <h2 class="form-section-title">"Contact Information"</h2>
                                    <div class="form-grid">
                                        <TextInput
                                            fields=fields
                                            name="phone"
                                            label="Phone Number"
                                            input_type="tel"
                                            placeholder="Your phone number"
                                        />
                                        <TextInput
                                            fields=fields
                                            name="email"
                                            label="Email"
                                            input_type="email"
                                            placeholder="Your email address"
                                        />
                                    </div>
                                </fieldset>

                                // Professional
                                <fieldset class="form-section">
                                    <h2 class="form-section-title">"Professional Details"</h2>
                                    <TextInput
                                        fields=fields
                                        name="languages"
                                        label="Languages Known"
                                        placeholder="e.g., English, Hindi, Tamil"
                                    />
                                    <Select
                                        fields=fields
                                        name="experienceLevel"
                                        label="Experience Level"
                                        options=experience_options()
                                    />
                                    <TextInput
                                        fields=fields
                                        name="videoLink"
                                        label="Showreel / Audition Video Link"
                                        input_type="url"
                                        placeholder="https://"
                                    />
                                    <PhotoPicker controller=controller />
                                </fieldset>

                                <TextArea
                                    fields=fields
                                    name="message"
                                    label="Message / Notes"
                                    rows=4
                                    placeholder="Any additional information about your experience, skills, or availability..."
                                />

                                <SubmitButton label="Submit Profile" busy_label="Submitting..." busy=busy />
                            </form>
                        </div>
                    </section>
                </div>
            }
        >
            <section class="section-padding page-thanks">
                <div class="container-narrow thanks-card">
                    <div class="success-icon">"✓"</div>
                    <h1 class="section-title">"Thank You for Submitting"</h1>
                    <p class="section-text">
                        "Thank you for submitting your profile. Our team will review the details
                        and contact you if suitable opportunities arise."
                    </p>
                </div>
            </section>
        </Show>
    }
}
