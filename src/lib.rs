// =============================================================================
// Next Frame Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod state;
pub mod submission;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use state::AppState;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(SiteConfig::from_build_env().log_level());
    log::info!("Mounting Next Frame web app...");
    leptos::mount::mount_to_body(app::App);
}
