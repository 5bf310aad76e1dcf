//! Error plumbing shared by every pursue crate.
//!
//! Each crate keeps its own `Error` enum. This crate only supplies the
//! `.context()` helpers, generated per crate by [`impl_context!`].

pub mod context;

pub use context::FromMessage;
