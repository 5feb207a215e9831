// =============================================================================
// Next Frame Web - Browser Services
// =============================================================================

pub mod toast;

pub use toast::{use_toaster, Notice, NoticeVariant, Toast, Toaster};
