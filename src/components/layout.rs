// =============================================================================
// Next Frame Web - Layout Components
// =============================================================================
// Table of Contents:
// 1. Layout (Main App Shell)
// =============================================================================

use leptos::prelude::*;

use crate::components::{Footer, ScrollToTop, SiteNav, ToastHost};

// -----------------------------------------------------------------------------
// 1. Layout (Main App Shell)
// -----------------------------------------------------------------------------

/// Shared chrome around every routed page: header, footer, toasts and
/// scroll restoration.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <ScrollToTop />
            <SiteNav />
            <main class="layout-content">
                {children()}
            </main>
            <Footer />
            <ToastHost />
        </div>
    }
}
