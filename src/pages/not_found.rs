// =============================================================================
// Next Frame Web - Missing Route
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

/// Fallback for any path the router doesn't know.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        log::warn!("no route for {}", pathname.get_untracked());
    });

    view! {
        <Title text="Page Not Found | Next Frame Casting" />
        <section class="section-padding page-not-found">
            <div class="container-narrow text-center">
                <span class="eyebrow">"Off Script"</span>
                <h1 class="section-title">"This scene didn't make the final cut"</h1>
                <p class="section-text">
                    {move || format!("There's nothing at {}.", pathname.get())}
                    " If you were looking to be considered for a role or to reach the team, start here."
                </p>
                <div class="cta-buttons">
                    <a href="/submit-profile" class="btn btn-primary">"Submit Your Profile"</a>
                    <a href="/contact" class="btn btn-outline">"Contact Us"</a>
                    <a href="/" class="btn btn-outline">"Back to Home"</a>
                </div>
            </div>
        </section>
    }
}
