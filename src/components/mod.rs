// =============================================================================
// Next Frame Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod layout;
pub mod nav;
pub mod photo_picker;
pub mod scroll;

pub use common::{InlineLoader, PageHero, ToastHost};
pub use footer::Footer;
pub use forms::{submit_form, FormFields, HoneypotField, Select, SelectOption, SubmitButton, TextArea, TextInput};
pub use layout::Layout;
pub use nav::SiteNav;
pub use photo_picker::PhotoPicker;
pub use scroll::ScrollToTop;
