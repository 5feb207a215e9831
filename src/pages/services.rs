// =============================================================================
// Next Frame Web - Services Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::PageHero;
use crate::utils::scroll_to_top;

/// One service offering. The home page shows `summary`; this page shows the rest.
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub details: [&'static str; 4],
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "film",
        title: "Casting Assistance",
        summary: "Support for casting directors during the entire casting process.",
        description: "Support to casting directors during casting processes including talent sourcing, shortlisting, and coordination.",
        details: [
            "Talent sourcing based on brief requirements",
            "Profile organization and presentation",
            "Communication with talent representatives",
            "Casting session coordination",
        ],
    },
    Service {
        icon: "users",
        title: "Talent Coordination",
        summary: "Managing communication and organization of actors and artists.",
        description: "Managing communication, availability, and organization of actors and artists.",
        details: [
            "Availability management",
            "Schedule coordination",
            "Communication liaison",
            "Documentation handling",
        ],
    },
    Service {
        icon: "clipboard-list",
        title: "Actor Shortlisting",
        summary: "Filtering talent profiles based on project requirements.",
        description: "Filtering talent profiles based on project requirements.",
        details: [
            "Profile screening and filtering",
            "Requirement matching",
            "Shortlist preparation",
            "Portfolio organization",
        ],
    },
    Service {
        icon: "monitor",
        title: "Casting Support for Ads, Short Films & OTT",
        summary: "Structured casting support across multiple content formats.",
        description: "Providing structured casting support across multiple content formats.",
        details: [
            "Advertisements and commercials",
            "Short films and independent projects",
            "Digital and web content",
            "OTT series and features",
        ],
    },
];

pub fn icon_src(icon: &str) -> String {
    format!("/assets/icons/{icon}.svg")
}

/// Services page.
#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Services | Next Frame Casting" />
        <div class="page page-services">
            <PageHero
                tag="Services"
                title="What We Offer"
                subtitle="Comprehensive casting support tailored to the needs of production teams and casting directors."
            />

            <section class="section-padding">
                <div class="container-main services-list">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| view! {
                            <article class="service-row fade-in-up" class:reversed=index % 2 == 1>
                                <div class="service-intro">
                                    <img src=icon_src(service.icon) alt="" class="service-icon" />
                                    <h2 class="service-title">{service.title}</h2>
                                    <p class="section-text">{service.description}</p>
                                </div>
                                <div class="service-card">
                                    <h3 class="service-card-title">"Key Areas"</h3>
                                    <ul class="service-details">
                                        {service
                                            .details
                                            .iter()
                                            .map(|detail| view! { <li>{*detail}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </article>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section-padding section-alt cta-section">
                <div class="container-narrow">
                    <h2 class="section-title">"Need Casting Support?"</h2>
                    <p class="section-text">
                        "Get in touch to discuss how we can assist with your project's casting requirements."
                    </p>
                    <a href="/contact" class="btn btn-primary btn-lg" on:click=move |_| scroll_to_top()>
                        "Contact Us"
                    </a>
                </div>
            </section>
        </div>
    }
}
