//! Client-side state modules for the auth page.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth_page`, `banner`, `form`, `session`) so
//! components depend on small focused models.

pub mod auth_page;
pub mod banner;
pub mod form;
pub mod session;
