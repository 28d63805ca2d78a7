//! Command interpreter.
//!
//! Owns the session state (no canvas yet, or an active canvas with its figure
//! registry) and drives a [`Surface`](crate::backend::Surface): prompt, read a
//! line, validate, draw, repeat until quit.

mod actions;
mod core;

pub use self::core::{Flow, Interpreter, SessionState, Settings};

/// Commands replayed by `--demo`: a canvas, two lines, a rectangle, and a fill.
pub const DEMO_SCRIPT: [&str; 5] = ["C 20 4", "L 1 2 6 2", "L 6 3 6 4", "R 16 1 20 3", "B 10 3 o"];
