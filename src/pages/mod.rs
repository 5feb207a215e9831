// =============================================================================
// Next Frame Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Marketing Pages
// 2. Form Pages
// =============================================================================

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;
pub mod submit_profile;

// 1. Marketing Pages
pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;

// 2. Form Pages
pub use contact::ContactPage;
pub use submit_profile::SubmitProfilePage;
