//! Decoding of command lines into [`Command`] values.
//!
//! The grammar is a fixed set of field patterns separated by single spaces:
//!
//! | Form            | Meaning                          |
//! |-----------------|----------------------------------|
//! | `C W H`         | create a `W` x `H` canvas        |
//! | `L X1 Y1 X2 Y2` | draw a horizontal/vertical line  |
//! | `R X1 Y1 X2 Y2` | draw a rectangle from corners    |
//! | `B X Y C`       | fill the area around `(X, Y)`    |
//! | `Q`             | quit                             |
//!
//! Numbers are unsigned decimal integers; the fill glyph is a single word
//! character (`[A-Za-z0-9_]`). Anything else decodes to [`Command::Unknown`].

/// A decoded command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Canvas { width: u32, height: u32 },
    Line { x1: u32, y1: u32, x2: u32, y2: u32 },
    Rect { x1: u32, y1: u32, x2: u32, y2: u32 },
    Fill { x: u32, y: u32, glyph: char },
    Quit,
    /// Line that matched none of the forms above, kept verbatim
    Unknown(String),
}

impl Command {
    /// Decodes one command line. Never fails; unrecognised input becomes
    /// [`Command::Unknown`].
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        decode(line).unwrap_or_else(|| Command::Unknown(line.to_string()))
    }
}

fn decode(line: &str) -> Option<Command> {
    let fields: Vec<&str> = line.split(' ').collect();

    let command = match fields.as_slice() {
        ["Q"] => Command::Quit,
        ["C", w, h] => Command::Canvas {
            width: number(w)?,
            height: number(h)?,
        },
        ["L", x1, y1, x2, y2] => Command::Line {
            x1: number(x1)?,
            y1: number(y1)?,
            x2: number(x2)?,
            y2: number(y2)?,
        },
        ["R", x1, y1, x2, y2] => Command::Rect {
            x1: number(x1)?,
            y1: number(y1)?,
            x2: number(x2)?,
            y2: number(y2)?,
        },
        ["B", x, y, c] => Command::Fill {
            x: number(x)?,
            y: number(y)?,
            glyph: word_char(c)?,
        },
        _ => return None,
    };

    Some(command)
}

/// Parses a run of ASCII digits. Values too large for `u32` saturate, which
/// still fails every later bounds check.
fn number(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(field.parse().unwrap_or(u32::MAX))
}

fn word_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() || c == '_' => Some(c),
        _ => None,
    }
}
