// =============================================================================
// Next Frame Web - Home Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::services::{icon_src, SERVICES};

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Next Frame Casting | Casting & Talent Coordination" />
        <div class="page page-home">
            // Hero
            <section class="hero">
                <div class="container-main hero-content fade-in-up">
                    <span class="hero-tag">"Next Frame Casting"</span>
                    <h1 class="hero-title">"Casting & Talent"<br />"Coordination"</h1>
                    <p class="hero-subtitle">
                        "Assistant casting support for films, ads, digital content & OTT platforms."
                    </p>
                    <a href="/submit-profile" class="btn btn-primary btn-lg">
                        "Submit Your Profile"
                        <span class="btn-arrow">"→"</span>
                    </a>
                </div>
            </section>

            // Intro
            <section class="section-padding">
                <div class="container-narrow text-center fade-in-up">
                    <h2 class="section-title">"Bridging Talent & Opportunity"</h2>
                    <p class="section-text">
                        "Next Frame Casting is a casting and talent coordination initiative focused on
                        supporting casting directors and filmmakers by organizing, shortlisting, and
                        coordinating talent for various projects including short films, advertisements,
                        digital campaigns, and OTT content."
                    </p>
                </div>
            </section>

            // Services preview
            <section class="section-padding section-alt">
                <div class="container-main">
                    <div class="section-header">
                        <span class="section-tag">"What We Do"</span>
                        <h2 class="section-title">"Our Services"</h2>
                    </div>
                    <div class="services-grid">
                        {SERVICES
                            .iter()
                            .map(|service| view! {
                                <div class="service-tile fade-in-up">
                                    <img src=icon_src(service.icon) alt="" class="service-icon" />
                                    <h3 class="service-tile-title">{service.title}</h3>
                                    <p class="service-tile-text">{service.summary}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                    <div class="text-center">
                        <a href="/services" class="link-arrow">"View All Services →"</a>
                    </div>
                </div>
            </section>

            // Call to action
            <section class="section-padding cta-section">
                <div class="container-narrow text-center">
                    <h2 class="section-title">"Ready to Connect?"</h2>
                    <p class="section-text">
                        "Looking to submit your profile or collaborate on upcoming projects?
                        Submit your details and let us connect you with the right opportunities."
                    </p>
                    <div class="cta-buttons">
                        <a href="/submit-profile" class="btn btn-primary btn-lg">"Submit Your Profile"</a>
                        <a href="/contact" class="btn btn-outline btn-lg">"Contact Us"</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
