// =============================================================================
// Next Frame Web - Site Navigation Component
// =============================================================================
// Fixed header shown on every page.
// Mobile-responsive with a hamburger toggle and drop-down link list.
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Primary navigation, shared with the footer.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/submit-profile", "Submit Profile"),
    ("/contact", "Contact"),
];

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/nextframe.casting";

/// Site header with desktop links and a mobile menu.
#[component]
pub fn SiteNav() -> impl IntoView {
    let pathname = use_location().pathname;

    // Mobile menu state
    let menu_open = RwSignal::new(false);

    // Close the menu whenever the route changes
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let link_class = move |href: &'static str, base: &'static str| {
        move || {
            if pathname.get() == href {
                format!("{base} active")
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <header class="site-header">
            <nav class="container-main site-nav">
                <a href="/" class="nav-logo">
                    <img src="/assets/nextframe.svg" alt="Next Frame Casting Logo" class="nav-logo-img" />
                    <div class="nav-logo-text">
                        <span class="nav-logo-title">"NEXT FRAME"</span>
                        <span class="nav-logo-subtitle">"Casting"</span>
                    </div>
                </a>

                // Desktop links
                <div class="nav-links desktop-only">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a href=*href class=link_class(*href, "nav-link")>{*label}</a>
                        })
                        .collect_view()}
                    <a
                        href=INSTAGRAM_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Instagram"
                        class="nav-social"
                    >
                        <img src="/assets/icons/instagram.svg" alt="" />
                    </a>
                </div>

                // Hamburger
                <button
                    class="nav-toggle mobile-only"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            // Mobile drawer
            <Show when=move || menu_open.get()>
                <div class="mobile-nav mobile-only">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a
                                href=*href
                                class=link_class(*href, "mobile-nav-link")
                                on:click=move |_| menu_open.set(false)
                            >
                                {*label}
                            </a>
                        })
                        .collect_view()}
                    <a
                        href=INSTAGRAM_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="mobile-nav-link"
                    >
                        "Instagram"
                    </a>
                </div>
            </Show>
        </header>
    }
}
