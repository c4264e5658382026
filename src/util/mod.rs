//! Pure helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and environment concerns from page and
//! component logic to improve reuse and testability.

pub mod dates;
pub mod files;
pub mod stars;
