// =============================================================================
// Next Frame Web - Scroll Restoration
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::utils::scroll_to_top;

/// Resets the scroll position whenever the route changes.
///
/// Scrolls once immediately and once more after the current task, for pages
/// whose content lands a tick after navigation.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        let path = pathname.get();
        log::debug!("route changed to {path}");
        scroll_to_top();
        spawn_local(async {
            TimeoutFuture::new(0).await;
            scroll_to_top();
        });
    });
}
