// =============================================================================
// Next Frame Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Page Hero
// 2. Loading Indicator
// 3. Toast Host
// =============================================================================

use leptos::prelude::*;

use crate::services::toast::use_toaster;

// -----------------------------------------------------------------------------
// 1. Page Hero
// -----------------------------------------------------------------------------

/// Heading band at the top of content pages.
#[component]
pub fn PageHero(
    #[prop(into)] tag: String,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            <div class="container-main">
                <div class="page-hero-content fade-in-up">
                    <span class="eyebrow">{tag}</span>
                    <h1 class="page-hero-title">{title}</h1>
                    <p class="page-hero-subtitle">{subtitle}</p>
                </div>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 2. Loading Indicator
// -----------------------------------------------------------------------------

/// Inline loading indicator.
#[component]
pub fn InlineLoader() -> impl IntoView {
    view! {
        <span class="spinner-small" aria-hidden="true"></span>
    }
}

// -----------------------------------------------------------------------------
// 3. Toast Host
// -----------------------------------------------------------------------------

/// Renders the toaster queue in a fixed corner of the viewport.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts();

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.notice.variant.class()>
                            <div class="toast-body">
                                <p class="toast-title">{toast.notice.title}</p>
                                <p class="toast-description">{toast.notice.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
