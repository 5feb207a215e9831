// =============================================================================
// Next Frame Web - Toast Notifications Service
// =============================================================================
// Transient, auto-dismissing notices shown over the page (submission results,
// skipped attachments). One `Toaster` is provided by the app shell.
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen.
pub const DISMISS_AFTER_MS: u32 = 5_000;

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE: usize = 3;

/// Visual weight of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    #[default]
    Default,
    Advisory,
    Destructive,
}

impl NoticeVariant {
    pub fn class(self) -> &'static str {
        match self {
            NoticeVariant::Default => "toast",
            NoticeVariant::Advisory => "toast toast-advisory",
            NoticeVariant::Destructive => "toast toast-destructive",
        }
    }
}

/// User-facing message content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn advisory(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Advisory,
            ..Self::new(title, description)
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// A notice currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub notice: Notice,
}

/// Queue of visible toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Show a notice and schedule its dismissal.
    pub fn push(&self, notice: Notice) -> Uuid {
        let id = Uuid::new_v4();
        log::debug!("toast {id}: {}", notice.title);

        self.toasts.update(|toasts| enqueue(toasts, Toast { id, notice }));

        let toaster = *self;
        Timeout::new(DISMISS_AFTER_MS, move || toaster.dismiss(id)).forget();
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        // The page may already be gone when a timer fires.
        let _ = self.toasts.try_update(|toasts| remove(toasts, id));
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `toast`, dropping the oldest beyond [`MAX_VISIBLE`].
fn enqueue(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_VISIBLE {
        let overflow = toasts.len() - MAX_VISIBLE;
        toasts.drain(..overflow);
    }
}

fn remove(toasts: &mut Vec<Toast>, id: Uuid) {
    toasts.retain(|t| t.id != id);
}

/// Get the app-wide toaster from context.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors_set_variant() {
        assert_eq!(Notice::new("a", "b").variant, NoticeVariant::Default);
        assert_eq!(Notice::advisory("a", "b").variant, NoticeVariant::Advisory);

        let failed = Notice::destructive("Submission failed", "Please try again in a moment.");
        assert!(failed.is_destructive());
        assert_eq!(failed.title, "Submission failed");
    }

    fn toast(title: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            notice: Notice::new(title, ""),
        }
    }

    fn titles(toasts: &[Toast]) -> Vec<&str> {
        toasts.iter().map(|t| t.notice.title.as_str()).collect()
    }

    #[test]
    fn test_enqueue_drops_oldest_past_limit() {
        let mut toasts = Vec::new();
        for title in ["one", "two", "three", "four"] {
            enqueue(&mut toasts, toast(title));
        }
        assert_eq!(toasts.len(), MAX_VISIBLE);
        assert_eq!(titles(&toasts), ["two", "three", "four"]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let toaster = Toaster::new();
            let (first, second) = (toast("first"), toast("second"));
            let second_id = second.id;
            toaster.toasts.update(|toasts| {
                enqueue(toasts, first);
                enqueue(toasts, second);
            });

            toaster.dismiss(second_id);
            assert_eq!(titles(&toaster.toasts().get_untracked()), ["first"]);

            // Unknown ids are ignored
            toaster.dismiss(Uuid::new_v4());
            assert_eq!(toaster.toasts().get_untracked().len(), 1);
        });
    }

    #[test]
    fn test_variant_classes() {
        assert_eq!(NoticeVariant::Default.class(), "toast");
        assert_eq!(NoticeVariant::Destructive.class(), "toast toast-destructive");
    }
}
