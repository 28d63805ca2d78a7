//! Command grammar and validation.
//!
//! A command line is decoded once into a [`Command`], then checked against the
//! current canvas by [`validate`], which yields either an executable
//! [`Action`] or a recoverable [`CommandError`].

pub mod error;
pub mod grammar;
pub mod validate;

pub use error::CommandError;
pub use grammar::Command;
pub use validate::{Action, Limits, validate};
