//! UI components composed by the auth page.
//!
//! ARCHITECTURE
//! ============
//! Components read shared signals from context and delegate state
//! transitions to `state::auth_page`; async work lives in `pages::auth_flow`.

pub mod banner;
pub mod login_form;
pub mod logo;
pub mod register_form;
pub mod tab_bar;
