use crate::backend::{Surface, SurfaceError};
use crate::command::{Action, Command, CommandError, validate};
use crate::draw::{Canvas, flood_fill};

use super::{Flow, Interpreter, SessionState};

impl<S: Surface> Interpreter<S> {
    /// Processes one command line.
    ///
    /// The line is decoded once, validated against the current state, and
    /// dispatched:
    /// - Quit releases the surface and ends the session, from either state
    /// - Canvas replaces the current canvas (if dimensions fit)
    /// - Line, Rect, and Fill draw onto the active canvas
    ///
    /// Validation failures are shown as warnings and leave the state
    /// untouched; nothing is drawn for a rejected command. Only surface
    /// failures are returned as errors.
    pub fn issue_command(&mut self, line: &str) -> Result<Flow, SurfaceError> {
        let command = Command::parse(line);
        self.diagnostics.debug(format!("Issued {command:?}"));

        let action = match validate(&command, self.state.canvas(), self.limits()) {
            Ok(action) => action,
            Err(err) => {
                self.reject(err)?;
                return Ok(Flow::Continue);
            }
        };

        match action {
            Action::Quit => return self.quit(),
            Action::CreateCanvas { width, height } => self.create_canvas(width, height)?,
            Action::DrawLine(line) => {
                let Some(canvas) = self.state.canvas_mut() else {
                    return self.reject(CommandError::NoCanvas);
                };
                canvas.draw_line(&mut self.surface, line, &self.settings.glyphs)?;
                self.diagnostics.debug(format!("Drew {line}"));
            }
            Action::DrawRect(rect) => {
                let Some(canvas) = self.state.canvas_mut() else {
                    return self.reject(CommandError::NoCanvas);
                };
                canvas.draw_rect(&mut self.surface, rect, &self.settings.glyphs)?;
                self.diagnostics.debug(format!("Drew {rect}"));
            }
            Action::Fill { seed, glyph } => {
                let Some(canvas) = self.state.canvas_mut() else {
                    return self.reject(CommandError::NoCanvas);
                };
                let report = flood_fill(canvas, &mut self.surface, seed, glyph)?;
                if report.painted == 0 {
                    self.diagnostics
                        .debug(format!("{seed} touches a border, nothing to fill"));
                } else {
                    let message = format!("Filled {} cells", report.painted);
                    self.surface.show_message(&message)?;
                    self.diagnostics.debug(format!("{message} from {seed}"));
                }
            }
        }

        Ok(Flow::Continue)
    }

    /// Releases the surface and ends the session.
    pub fn quit(&mut self) -> Result<Flow, SurfaceError> {
        self.diagnostics.info("Quit requested, releasing surface");
        self.surface.release()?;
        Ok(Flow::Quit)
    }

    /// Erases the previous canvas (border and figures), then draws the new one.
    ///
    /// The new canvas starts with an empty figure registry.
    fn create_canvas(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if let SessionState::CanvasReady(previous) = std::mem::take(&mut self.state) {
            previous.erase(&mut self.surface)?;
            self.diagnostics.info(format!(
                "Replaced {}x{} canvas ({} figures discarded)",
                previous.width(),
                previous.height(),
                previous.registry().len()
            ));
        }

        let canvas = Canvas::new(width, height);
        canvas.render_border(&mut self.surface, &self.settings.glyphs)?;
        self.state = SessionState::CanvasReady(canvas);
        self.diagnostics
            .info(format!("Created {width}x{height} canvas"));
        Ok(())
    }

    fn reject(&mut self, err: CommandError) -> Result<Flow, SurfaceError> {
        let message = err.to_string();
        self.diagnostics.warn(message.clone());
        self.surface.warn(&message)?;
        Ok(Flow::Continue)
    }
}
