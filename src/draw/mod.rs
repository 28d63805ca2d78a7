//! Geometry primitives, canvas state, and character rendering.
//!
//! This module defines the core drawing types of the engine:
//! - [`Point`], [`Line`], [`Rect`]: pure grid geometry and membership tests
//! - [`Figure`] and [`Registry`]: everything drawn since the canvas appeared
//! - [`Canvas`]: the active grid and its border predicate
//! - [`flood_fill`]: border-aware area fill
//! - Rendering functions that issue glyph writes to a [`Surface`](crate::backend::Surface)

pub mod canvas;
pub mod figure;
pub mod fill;
pub mod line;
pub mod point;
pub mod rect;
pub mod render;
pub mod style;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use figure::{Figure, Registry};
pub use fill::{FillReport, flood_fill};
pub use line::{Line, Orientation};
pub use point::Point;
pub use rect::Rect;
pub use style::{BLANK, Glyphs, RenderStyle};
