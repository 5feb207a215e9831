// =============================================================================
// Next Frame Web - Contact Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use web_sys::File;

use crate::components::footer::CONTACT_EMAIL;
use crate::components::nav::INSTAGRAM_URL;
use crate::components::{submit_form, FormFields, HoneypotField, PageHero, SubmitButton, TextArea, TextInput};
use crate::services::toast::use_toaster;
use crate::state::use_app_state;
use crate::submission::{FormController, FormKind};

/// Contact page with the inquiry form.
#[component]
pub fn ContactPage() -> impl IntoView {
    let app_state = use_app_state();
    let toaster = use_toaster();

    let kind = FormKind::Contact;
    let fields = FormFields::new(kind);
    let controller = RwSignal::new_local(FormController::<File>::new(kind));
    let transport = StoredValue::new(app_state.transport);

    let submitted = move || controller.with(|c| c.is_submitted());
    let busy = Signal::derive(move || controller.with(|c| c.is_submitting()));

    let send_another = move |_| {
        controller.update(|c| {
            if let Err(e) = c.send_another() {
                log::warn!("{e}");
            }
        });
    };

    view! {
        <Title text="Contact | Next Frame Casting" />
        <div class="page page-contact">
            <PageHero
                tag="Get in Touch"
                title="Contact Us"
                subtitle="Have questions about casting support or want to collaborate? We'd love to hear from you."
            />

            <section class="section-padding">
                <div class="container-main contact-grid">
                    // Contact details
                    <div class="contact-info fade-in-up">
                        <h2 class="section-title">"Let's Connect"</h2>
                        <p class="section-text">
                            "Whether you're a casting director looking for support, a production team
                            needing talent coordination, or an artist wanting to submit your profile,
                            reach out and we'll get back to you."
                        </p>

                        <div class="contact-items">
                            <div class="contact-item">
                                <img src="/assets/icons/mail.svg" alt="" class="contact-icon" />
                                <div>
                                    <h3>"Email"</h3>
                                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                                </div>
                            </div>
                            <div class="contact-item">
                                <img src="/assets/icons/instagram.svg" alt="" class="contact-icon" />
                                <div>
                                    <h3>"Instagram"</h3>
                                    <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer">
                                        "@nextframe.casting"
                                    </a>
                                </div>
                            </div>
                            <div class="contact-item">
                                <img src="/assets/icons/map-pin.svg" alt="" class="contact-icon" />
                                <div>
                                    <h3>"Based In"</h3>
                                    <p>"India"</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Form / confirmation
                    <div class="contact-form-wrap fade-in-up">
                        <Show
                            when=submitted
                            fallback=move || view! {
                                <form
                                    name=kind.form_name()
                                    method="POST"
                                    data-netlify="true"
                                    netlify-honeypot="bot-field"
                                    class="form-card"
                                    on:submit=move |ev| {
                                        ev.prevent_default();
                                        submit_form(controller, fields, transport.get_value(), toaster);
                                    }
                                >
                                    <input type="hidden" name="form-name" value=kind.form_name() />
                                    <HoneypotField fields=fields />

                                    <TextInput fields=fields name="name" label="Name" placeholder="Your name" />
                                    <TextInput
                                        fields=fields
                                        name="email"
                                        id="contactEmail"
                                        label="Email"
                                        input_type="email"
                                        placeholder="Your email address"
                                    />
                                    <TextArea
                                        fields=fields
                                        name="message"
                                        id="contactMessage"
                                        label="Message"
                                        rows=5
                                        placeholder="How can we help you?"
                                    />

                                    <SubmitButton label="Send Message" busy_label="Sending..." busy=busy />
                                </form>
                            }
                        >
                            <div class="success-panel">
                                <div class="success-icon">"✓"</div>
                                <h3>"Message Sent Successfully!"</h3>
                                <p>"Thank you for reaching out. We'll get back to you soon."</p>
                                <button type="button" class="btn btn-outline" on:click=send_another>
                                    "Send Another Message"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </section>
        </div>
    }
}
