/// Terminal presenter: owns the crossterm session and flushes a `Canvas`.
///
/// Frames are diffed against the previous one and only changed cells are
/// written, with colour changes batched through `queue!` and a single flush
/// per frame.
use std::io::Write;

use crossterm::{
    cursor::{self, MoveTo},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use log::debug;

use super::canvas::{Canvas, Cell};
use super::Rgb;
use crate::error::GameError;

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

pub struct Screen<W: Write> {
    out: W,
    keyboard_enhanced: bool,
    /// Last frame written, with its dimensions.
    back: Option<(usize, usize, Vec<Cell>)>,
}

impl<W: Write> Screen<W> {
    /// Switch the terminal into raw, alternate-screen mode.
    pub fn enter(mut out: W) -> Result<Self, GameError> {
        terminal::enable_raw_mode().map_err(GameError::TerminalSetup)?;
        let entered = out
            .execute(terminal::EnterAlternateScreen)
            .and_then(|out| out.execute(cursor::Hide))
            .map(|_| ());
        if let Err(e) = entered {
            let _ = out.execute(terminal::LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
            return Err(GameError::TerminalSetup(e));
        }

        // Request key-release (and key-repeat) events from the terminal.
        // Kitty-protocol terminals support this; others fall back gracefully.
        let keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        debug!("keyboard enhancement: {}", keyboard_enhanced);

        Ok(Screen {
            out,
            keyboard_enhanced,
            back: None,
        })
    }

    /// Current terminal size in cells.
    pub fn size() -> Result<(usize, usize), GameError> {
        let (cols, rows) = terminal::size()?;
        Ok((cols as usize, rows as usize))
    }

    /// Force the next `present` to redraw every cell.
    pub fn invalidate(&mut self) {
        self.back = None;
    }

    pub fn present(&mut self, canvas: &Canvas) -> Result<(), GameError> {
        let (cols, rows) = (canvas.cols(), canvas.rows());
        let previous = match self.back.take() {
            Some((c, r, cells)) if c == cols && r == rows => Some(cells),
            _ => {
                queue!(self.out, ResetColor, Clear(ClearType::All))?;
                None
            }
        };

        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut cursor_at: Option<(usize, usize)> = None;

        for row in 0..rows {
            for col in 0..cols {
                let idx = row * cols + col;
                let cell = canvas.cells()[idx];
                if previous.as_ref().map(|p| p[idx] == cell).unwrap_or(false) {
                    continue;
                }
                if cursor_at != Some((col, row)) {
                    queue!(self.out, MoveTo(col as u16, row as u16))?;
                }
                if last_bg != Some(cell.bg) {
                    queue!(self.out, SetBackgroundColor(color(cell.bg)))?;
                    last_bg = Some(cell.bg);
                }
                if last_fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(color(cell.fg)))?;
                    last_fg = Some(cell.fg);
                }
                queue!(self.out, Print(cell.glyph))?;
                cursor_at = Some((col + 1, row));
            }
        }

        self.out.flush()?;
        self.back = Some((cols, rows, canvas.cells().to_vec()));
        Ok(())
    }

    /// Restore the terminal.  Errors are ignored: this runs on the way out.
    pub fn leave(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(ResetColor);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
