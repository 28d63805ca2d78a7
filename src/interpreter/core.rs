//! Session state machine and command loop.

use crate::backend::{Surface, SurfaceError};
use crate::command::Limits;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::draw::{Canvas, Glyphs};
use log::Level;

/// Whether a canvas is available to draw on.
///
/// The canvas (and with it the figure registry) is owned by the state and
/// replaced wholesale by the next canvas command.
#[derive(Debug, Default)]
pub enum SessionState {
    /// Initial state: only canvas and quit commands can succeed
    #[default]
    NoCanvas,
    /// A canvas is active and accepts figures
    CanvasReady(Canvas),
}

impl SessionState {
    pub fn canvas(&self) -> Option<&Canvas> {
        match self {
            SessionState::NoCanvas => None,
            SessionState::CanvasReady(canvas) => Some(canvas),
        }
    }

    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        match self {
            SessionState::NoCanvas => None,
            SessionState::CanvasReady(canvas) => Some(canvas),
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interpreter settings derived from configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Glyphs used for figures and the canvas border
    pub glyphs: Glyphs,
    /// Canvas heights must stay strictly below this
    pub max_height: u32,
    /// Prompt shown before each command
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            glyphs: config.glyphs(),
            max_height: config.canvas.max_height,
            prompt: config.ui.prompt.clone(),
        }
    }
}

/// Reads command lines from a surface and executes them one at a time.
///
/// Each command runs to completion (including a full flood fill) before the
/// next line is read, so one command is one atomic unit of surface mutation.
pub struct Interpreter<S: Surface> {
    pub(super) surface: S,
    pub(super) state: SessionState,
    pub(super) settings: Settings,
    pub(super) diagnostics: Diagnostics,
}

impl<S: Surface> Interpreter<S> {
    /// Creates an interpreter in the `NoCanvas` state.
    ///
    /// # Arguments
    /// * `surface` - Render surface the session draws on and reads from
    /// * `settings` - Glyphs, height limit, and prompt
    /// * `diagnostics` - Sink receiving session diagnostics
    pub fn new(surface: S, settings: Settings, diagnostics: Diagnostics) -> Self {
        Self {
            surface,
            state: SessionState::NoCanvas,
            settings,
            diagnostics,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.state.canvas()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Canvas limits for the current surface.
    pub fn limits(&self) -> Limits {
        Limits {
            max_width: self.surface.max_width(),
            max_height: self.settings.max_height,
        }
    }

    /// Consumes the interpreter, handing back the surface and diagnostics.
    pub fn into_parts(self) -> (S, Diagnostics) {
        (self.surface, self.diagnostics)
    }

    /// Runs the command loop until quit or end of input.
    ///
    /// On a fatal surface failure the surface is released before the error
    /// is returned.
    pub fn run(&mut self) -> Result<(), SurfaceError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(err) => return Err(self.abort(err)),
            }
        }
    }

    /// Executes `lines` in order, stopping early on quit.
    pub fn run_script<I, L>(&mut self, lines: I) -> Result<Flow, SurfaceError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        for line in lines {
            match self.issue_command(line.as_ref()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(Flow::Quit),
                Err(err) => return Err(self.abort(err)),
            }
        }
        Ok(Flow::Continue)
    }

    /// Shows `message` and waits for it to be acknowledged.
    pub fn acknowledge(&mut self, message: &str) -> Result<(), SurfaceError> {
        self.surface.warn(message).map_err(|err| self.abort(err))
    }

    /// Reads and executes a single command. End of input counts as quit.
    fn step(&mut self) -> Result<Flow, SurfaceError> {
        let Some(line) = self.surface.read_line(&self.settings.prompt)? else {
            self.diagnostics.info("End of input");
            return self.quit();
        };
        self.issue_command(&line)
    }

    fn abort(&mut self, err: SurfaceError) -> SurfaceError {
        self.diagnostics
            .record(Level::Error, format!("Session aborted: {err}"));
        if let Err(release_err) = self.surface.release() {
            self.diagnostics.record(
                Level::Error,
                format!("Failed to release surface: {release_err}"),
            );
        }
        err
    }
}
