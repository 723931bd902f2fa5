//! Line-oriented rendering surface over any reader and writer pair.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tower_climb_rendering::{parse_intent, Frame, Intent, RenderingSurface};
use tower_climb_system_view::Screen;

/// Surface that prints frames as text and reads one intent per line.
pub(crate) struct TerminalSurface<I, O> {
    input: I,
    output: O,
}

impl<I, O> TerminalSurface<I, O>
where
    I: BufRead,
    O: Write,
{
    /// Creates a surface reading from `input` and printing to `output`.
    pub(crate) fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl<I, O> RenderingSurface for TerminalSurface<I, O>
where
    I: BufRead,
    O: Write,
{
    fn present(&mut self, frame: &Frame) -> Result<()> {
        writeln!(self.output, "{frame}").context("failed to write frame")?;
        self.output.flush().context("failed to flush frame")
    }

    fn next_intent(&mut self, screen: Screen) -> Result<Option<Intent>> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read player input")?;
            if read == 0 {
                return Ok(None);
            }
            if let Some(intent) = parse_intent(screen, &line) {
                return Ok(Some(intent));
            }
        }
    }
}
