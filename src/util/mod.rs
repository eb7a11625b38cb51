//! Utility helpers shared across the auth page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `copy` owns every user-facing string and `picker` decides which variant
//! to show, keeping randomness out of page and component logic.

pub mod copy;
pub mod picker;
