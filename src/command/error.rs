//! Recoverable command failures.

use crate::draw::Line;
use thiserror::Error;

/// A command that was rejected before any drawing happened.
///
/// Every variant is recoverable: the interpreter shows the message as a
/// warning and keeps the session going with its state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: \"{0}\"")]
    Unknown(String),

    #[error("Canvas is too wide")]
    CanvasTooWide,

    #[error("Canvas is too tall")]
    CanvasTooTall,

    #[error("Please draw a canvas before issuing other commands")]
    NoCanvas,

    #[error("Line does not fit current canvas")]
    LineOutsideCanvas,

    #[error("Invalid line {0}")]
    DiagonalLine(Line),

    #[error("Rectangle does not fit current canvas")]
    RectOutsideCanvas,

    #[error("Point is outside current canvas")]
    PointOutsideCanvas,
}
