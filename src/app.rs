// =============================================================================
// Next Frame Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Imports
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Layout;
use crate::pages::{
    AboutPage, ContactPage, HomePage, NotFoundPage, ServicesPage, SubmitProfilePage,
};
use crate::services::toast::Toaster;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Global state: build config, form transport, toast queue
    provide_context(AppState::new());
    provide_context(Toaster::new());

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------
    view! {
        <Title text="Next Frame Casting" />
        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/submit-profile") view=SubmitProfilePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Layout>
        </Router>
    }
}
