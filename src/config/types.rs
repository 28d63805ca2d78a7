//! Configuration type definitions.

use crate::draw::Glyphs;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas size settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas heights must stay strictly below this value (valid range: 1 - 200)
    #[serde(default = "default_max_height")]
    pub max_height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            max_height: default_max_height(),
        }
    }
}

/// Characters used to render figures and the canvas border.
///
/// Each value must be a single, non-whitespace character.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GlyphConfig {
    /// Marker for lines and rectangles
    #[serde(default = "default_figure_glyph")]
    pub figure: char,

    /// Top and bottom canvas border
    #[serde(default = "default_canvas_horizontal")]
    pub canvas_horizontal: char,

    /// Left and right canvas border
    #[serde(default = "default_canvas_vertical")]
    pub canvas_vertical: char,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            figure: default_figure_glyph(),
            canvas_horizontal: default_canvas_horizontal(),
            canvas_vertical: default_canvas_vertical(),
        }
    }
}

impl GlyphConfig {
    pub fn to_glyphs(&self) -> Glyphs {
        Glyphs {
            figure: self.figure,
            canvas_horizontal: self.canvas_horizontal,
            canvas_vertical: self.canvas_vertical,
        }
    }
}

/// Status area preferences.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Text shown when asking for the next command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Rows between the maximum canvas height and the status row (valid range: 2 - 10)
    #[serde(default = "default_status_gap")]
    pub status_gap: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            status_gap: default_status_gap(),
        }
    }
}

/// Batch mode settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BatchConfig {
    /// Column count of the in-memory grid (valid range: 3 - 1000)
    #[serde(default = "default_batch_width")]
    pub width: u32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            width: default_batch_width(),
        }
    }
}

fn default_max_height() -> u32 {
    28
}

fn default_figure_glyph() -> char {
    Glyphs::default().figure
}

fn default_canvas_horizontal() -> char {
    Glyphs::default().canvas_horizontal
}

fn default_canvas_vertical() -> char {
    Glyphs::default().canvas_vertical
}

fn default_prompt() -> String {
    "enter command: ".to_string()
}

fn default_status_gap() -> u32 {
    2
}

fn default_batch_width() -> u32 {
    80
}
