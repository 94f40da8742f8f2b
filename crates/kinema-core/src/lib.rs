//! # kinema-core
//!
//! Shared foundation types for the kinema workspace.
//!
//! This crate has no internal dependencies. Every other kinema crate
//! reports failures through the [`Error`] enum defined here:
//!
//! ```text
//! kinema-core (this crate)
//!    ^
//!    |
//!    +-- kinema-math (vectors, matrices, scalar utilities)
//!    +-- kinema-cli (command-line front end)
//! ```
//!
//! The math crate is almost entirely total: the only partial operations are
//! matrix inversion and the checked element accessors. Their fallible forms
//! return [`Result`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Prelude module for convenient imports.
///
/// ```
/// use kinema_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
}
