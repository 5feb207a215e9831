// =============================================================================
// Next Frame Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use chrono::Datelike;
use leptos::prelude::*;

use crate::components::nav::{INSTAGRAM_URL, NAV_LINKS};
use crate::utils::scroll_to_top;

pub const CONTACT_EMAIL: &str = "castingnextframe@gmail.com";

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="container-main footer-grid">
                // Brand
                <div class="footer-brand">
                    <h3 class="footer-title">"NEXT FRAME"</h3>
                    <p class="footer-subtitle">"Casting"</p>
                    <p class="footer-tagline">
                        "Casting & talent coordination support for films, ads, digital content & OTT platforms."
                    </p>
                </div>

                // Navigation
                <div class="footer-col">
                    <h4 class="footer-col-title">"Navigation"</h4>
                    <nav class="footer-links">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a href=*href class="footer-link" on:click=move |_| scroll_to_top()>
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                </div>

                // Connect
                <div class="footer-col">
                    <h4 class="footer-col-title">"Connect"</h4>
                    <a href=format!("mailto:{CONTACT_EMAIL}") class="footer-link">{CONTACT_EMAIL}</a>
                    <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer" class="footer-link">
                        "@nextframe.casting"
                    </a>
                </div>
            </div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">
                    {format!("© {year} Next Frame Casting. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
