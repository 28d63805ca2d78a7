//! Library exports for the asciidraw drawing engine.
//!
//! The binary is a thin shell over these modules; tests and other front ends
//! can drive the interpreter against any [`backend::Surface`].

pub mod backend;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod draw;
pub mod interpreter;

pub use config::Config;
