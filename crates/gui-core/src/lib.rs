//! Toolkit-facing action vocabulary shared by the date copy frontends.
//!
//! Frontends describe what the user asked for as an [`Action`] and hand it to
//! whatever implements [`ActionDispatcher`]; menu items and keyboard
//! shortcuts are built from [`ActionDescriptor`]s.

pub mod actions;

pub use actions::*;
