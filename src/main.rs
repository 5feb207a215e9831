// =============================================================================
// Next Frame Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use nextframe_web::{App, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();

    // Ignore if already initialized by `mount`
    let config = SiteConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level());

    log::info!("Starting Next Frame web ({:?})", config.environment);

    leptos::mount::mount_to_body(App);
}
