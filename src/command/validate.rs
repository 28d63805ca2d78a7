//! Semantic checks that turn a [`Command`] into a drawable [`Action`].

use super::error::CommandError;
use super::grammar::Command;
use crate::draw::canvas::coord;
use crate::draw::{Canvas, Line, Point, Rect, RenderStyle};

/// Canvas size limits imposed by the surface and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Canvas widths must stay strictly below this (surface addressable width)
    pub max_width: u32,
    /// Canvas heights must stay strictly below this
    pub max_height: u32,
}

/// A command that passed validation and can be executed without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    CreateCanvas { width: u32, height: u32 },
    DrawLine(Line),
    DrawRect(Rect),
    Fill { seed: Point, glyph: char },
}

/// Classifies and checks `command` against the current canvas, if any.
///
/// Quit always passes. Canvas commands only depend on `limits`. Every other
/// command, unknown lines included, needs an active canvas; drawing commands
/// must also stay inside its interior.
pub fn validate(
    command: &Command,
    canvas: Option<&Canvas>,
    limits: Limits,
) -> Result<Action, CommandError> {
    match *command {
        Command::Quit => Ok(Action::Quit),
        Command::Unknown(_) if canvas.is_none() => Err(CommandError::NoCanvas),
        Command::Unknown(ref text) => Err(CommandError::Unknown(text.clone())),
        Command::Canvas { width, height } => {
            check_canvas(width, height, limits)?;
            Ok(Action::CreateCanvas { width, height })
        }
        Command::Line { x1, y1, x2, y2 } => {
            let canvas = canvas.ok_or(CommandError::NoCanvas)?;
            check_line(canvas, point(x1, y1), point(x2, y2)).map(Action::DrawLine)
        }
        Command::Rect { x1, y1, x2, y2 } => {
            let canvas = canvas.ok_or(CommandError::NoCanvas)?;
            check_rect(canvas, point(x1, y1), point(x2, y2)).map(Action::DrawRect)
        }
        Command::Fill { x, y, glyph } => {
            let canvas = canvas.ok_or(CommandError::NoCanvas)?;
            let seed = check_fill(canvas, point(x, y))?;
            Ok(Action::Fill { seed, glyph })
        }
    }
}

/// Rejects canvases that would not fit the surface.
pub fn check_canvas(width: u32, height: u32, limits: Limits) -> Result<(), CommandError> {
    if width >= limits.max_width {
        Err(CommandError::CanvasTooWide)
    } else if height >= limits.max_height {
        Err(CommandError::CanvasTooTall)
    } else {
        Ok(())
    }
}

/// Both endpoints must be interior cells and the line must be axis-aligned.
pub fn check_line(canvas: &Canvas, p1: Point, p2: Point) -> Result<Line, CommandError> {
    if !canvas.contains(p1) || !canvas.contains(p2) {
        return Err(CommandError::LineOutsideCanvas);
    }

    let line = Line::new(p1, p2);
    if line.validate() {
        Ok(line)
    } else {
        Err(CommandError::DiagonalLine(line))
    }
}

/// Both corners must be interior cells.
pub fn check_rect(canvas: &Canvas, p1: Point, p2: Point) -> Result<Rect, CommandError> {
    if canvas.contains(p1) && canvas.contains(p2) {
        Ok(Rect::from_corners(p1, p2, RenderStyle::Figure))
    } else {
        Err(CommandError::RectOutsideCanvas)
    }
}

/// The seed must be an interior cell.
pub fn check_fill(canvas: &Canvas, seed: Point) -> Result<Point, CommandError> {
    if canvas.contains(seed) {
        Ok(seed)
    } else {
        Err(CommandError::PointOutsideCanvas)
    }
}

fn point(x: u32, y: u32) -> Point {
    Point::new(coord(x), coord(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: Limits = Limits {
        max_width: 80,
        max_height: 28,
    };

    fn check(line: &str, canvas: Option<&Canvas>) -> Result<Action, CommandError> {
        validate(&Command::parse(line), canvas, LIMITS)
    }

    #[test]
    fn quit_always_validates() {
        assert_eq!(check("Q", None), Ok(Action::Quit));
        assert_eq!(check("Q", Some(&Canvas::new(5, 5))), Ok(Action::Quit));
    }

    #[test]
    fn canvas_limits_are_exclusive() {
        assert_eq!(
            check("C 79 27", None),
            Ok(Action::CreateCanvas {
                width: 79,
                height: 27
            })
        );
        assert_eq!(check("C 80 4", None), Err(CommandError::CanvasTooWide));
        assert_eq!(check("C 20 28", None), Err(CommandError::CanvasTooTall));
        assert_eq!(check("C 80 28", None), Err(CommandError::CanvasTooWide));
    }

    #[test]
    fn drawing_requires_a_canvas() {
        for line in ["L 1 2 6 2", "R 1 1 3 3", "B 1 1 o"] {
            assert_eq!(check(line, None), Err(CommandError::NoCanvas));
        }
    }

    #[test]
    fn unknown_commands_echo_their_text() {
        let canvas = Canvas::new(5, 5);
        let err = check("draw me a sheep", Some(&canvas)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: \"draw me a sheep\"");
    }

    #[test]
    fn unknown_commands_without_canvas_ask_for_one() {
        assert_eq!(check("draw me a sheep", None), Err(CommandError::NoCanvas));
        assert_eq!(check("", None), Err(CommandError::NoCanvas));
    }

    #[test]
    fn line_must_stay_inside_the_interior() {
        let canvas = Canvas::new(20, 4);

        assert!(matches!(check("L 1 2 6 2", Some(&canvas)), Ok(Action::DrawLine(_))));
        assert_eq!(
            check("L 1 2 100 2", Some(&canvas)),
            Err(CommandError::LineOutsideCanvas)
        );
        assert_eq!(
            check("L 0 2 6 2", Some(&canvas)),
            Err(CommandError::LineOutsideCanvas)
        );
        assert_eq!(
            check("L 20 1 20 5", Some(&canvas)),
            Err(CommandError::LineOutsideCanvas)
        );
    }

    #[test]
    fn diagonal_line_is_rejected_with_its_shape() {
        let canvas = Canvas::new(20, 4);
        let err = check("L 1 1 3 3", Some(&canvas)).unwrap_err();

        assert!(matches!(err, CommandError::DiagonalLine(_)));
        assert_eq!(
            err.to_string(),
            "Invalid line Line(Point(1, 1), Point(3, 3))"
        );
    }

    #[test]
    fn line_endpoints_are_normalised() {
        let canvas = Canvas::new(20, 4);
        let Ok(Action::DrawLine(line)) = check("L 6 2 1 2", Some(&canvas)) else {
            panic!("line should validate");
        };
        assert_eq!(line.p1(), Point::new(1, 2));
    }

    #[test]
    fn rect_corners_must_be_interior() {
        let canvas = Canvas::new(20, 4);

        assert!(matches!(
            check("R 16 1 20 3", Some(&canvas)),
            Ok(Action::DrawRect(_))
        ));
        assert_eq!(
            check("R 16 1 20 40", Some(&canvas)),
            Err(CommandError::RectOutsideCanvas)
        );
    }

    #[test]
    fn fill_seed_must_be_interior() {
        let canvas = Canvas::new(20, 4);

        assert_eq!(
            check("B 10 3 o", Some(&canvas)),
            Ok(Action::Fill {
                seed: Point::new(10, 3),
                glyph: 'o'
            })
        );
        assert_eq!(
            check("B 21 3 o", Some(&canvas)),
            Err(CommandError::PointOutsideCanvas)
        );
    }

    #[test]
    fn saturated_coordinates_fail_bounds_checks() {
        let canvas = Canvas::new(20, 4);
        assert_eq!(
            check("B 99999999999 1 o", Some(&canvas)),
            Err(CommandError::PointOutsideCanvas)
        );
    }
}
