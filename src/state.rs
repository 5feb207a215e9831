// =============================================================================
// Next Frame Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App State
// =============================================================================

use leptos::prelude::*;

use crate::api::{transport_for, SiteTransport};
use crate::config::SiteConfig;

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Resolved build configuration.
    pub config: SiteConfig,

    /// Transport shared by every form on the site.
    pub transport: SiteTransport,
}

impl AppState {
    /// Create app state from the compile-time configuration.
    pub fn new() -> Self {
        Self::with_config(SiteConfig::from_build_env())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        if config.diagnostic_refused {
            log::warn!("FORMS_DIAGNOSTIC ignored: production builds always report real outcomes");
        }
        match serde_json::to_string(&config) {
            Ok(json) => log::debug!("site config: {json}"),
            Err(e) => log::debug!("site config not serializable: {e}"),
        }

        let transport = transport_for(&config);
        Self { config, transport }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app state from context.
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
