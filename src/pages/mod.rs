//! Page modules for the named panels.
//!
//! ARCHITECTURE
//! ============
//! Each page owns panel-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod complaints;
pub mod contact;
pub mod feedback;
pub mod home;
pub mod how_it_works;
pub mod previous;
