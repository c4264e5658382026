//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module here is a plain struct or enum with synchronous transitions.
//! Components wrap them in `RwSignal`s provided via context and re-render
//! from the signal, so no view can go stale and the whole layer is testable
//! without a browser.

pub mod attachments;
pub mod entries;
pub mod form;
pub mod nav;
pub mod sample;
pub mod store;
pub mod toast;
pub mod verify;
