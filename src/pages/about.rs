// =============================================================================
// Next Frame Web - About Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::PageHero;

const VALUES: [&str; 4] = [
    "Professional communication at every step",
    "Organized and structured workflows",
    "Attention to casting requirements",
    "Respect for talent and production teams",
];

/// (label, value) pairs for the formats strip.
const FORMATS: [(&str, &str); 4] = [
    ("Short Films", "Films"),
    ("Advertisements", "Ads"),
    ("Digital Content", "Digital"),
    ("OTT Platforms", "OTT"),
];

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About | Next Frame Casting" />
        <div class="page page-about">
            <PageHero
                tag="About Us"
                title="Our Approach to Casting"
                subtitle="Professional casting support built on organization, communication, and attention to detail."
            />

            <section class="section-padding">
                <div class="container-narrow fade-in-up">
                    <h2 class="section-title">"Who We Are"</h2>
                    <p class="section-text">
                        "Next Frame Casting works as a casting support and talent coordination office.
                        The focus is on assisting casting directors with talent sourcing, coordination,
                        and shortlisting while maintaining organized talent data for efficient casting workflows."
                    </p>
                    <p class="section-text">
                        "The goal is to bridge the gap between talent and casting requirements through
                        clear communication, professional coordination, and structured submissions."
                    </p>
                </div>
            </section>

            <section class="section-padding section-alt">
                <div class="container-main about-grid">
                    <div class="about-card">
                        <h3>"Our Mission"</h3>
                        <p>
                            "To streamline the casting process by providing reliable coordination
                            and organized talent management for production teams."
                        </p>
                    </div>
                    <div class="about-card">
                        <h3>"Our Values"</h3>
                        <ul class="values-list">
                            {VALUES.iter().map(|value| view! { <li>{*value}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </section>

            <section class="section-padding">
                <div class="container-main formats-strip">
                    {FORMATS
                        .iter()
                        .map(|(label, value)| view! {
                            <div class="format-item">
                                <span class="format-value">{*value}</span>
                                <span class="format-label">{*label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
