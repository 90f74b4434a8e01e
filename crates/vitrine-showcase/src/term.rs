#![forbid(unsafe_code)]

//! Terminal lifecycle and frame presentation.
//!
//! [`TerminalSession`] is an RAII guard over raw mode, the alternate
//! screen, and optional mouse capture. Cleanup lives in [`Drop`] so it
//! runs on every exit path, and a panic hook restores the terminal
//! before the panic message prints.
//!
//! [`present`] writes a full frame: each row is repainted with 24-bit
//! SGR sequences, emitting a new sequence only when the style changes
//! between cells.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use vitrine_core::event::Event;
use vitrine_render::Buffer;
use vitrine_style::{Color, StyleFlags};

/// RAII guard over the terminal modes the showcase enables.
///
/// Only one session should exist at a time. Modes are disabled in
/// reverse order of enabling when the guard drops.
#[derive(Debug)]
pub struct TerminalSession {
    mouse_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode, switch to the alternate screen, and hide the
    /// cursor. Mouse capture is enabled when `mouse` is true.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the escape
    /// sequences cannot be written.
    pub fn new(mouse: bool) -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut stdout = io::stdout();
        crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide
        )?;

        let mut session = Self {
            mouse_enabled: false,
        };
        if mouse {
            crossterm::execute!(stdout, crossterm::event::EnableMouseCapture)?;
            session.mouse_enabled = true;
            tracing::info!("mouse capture enabled");
        }
        Ok(session)
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    /// Wait up to `timeout` for input. Returns the next canonical
    /// event, or `None` on timeout or when the backend event has no
    /// canonical counterpart.
    pub fn next_event(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        let event = crossterm::event::read()?;
        Ok(Event::from_crossterm(event))
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        if self.mouse_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
            self.mouse_enabled = false;
        }
        let _ = crossterm::execute!(
            stdout,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::info!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_restore();
            previous(info);
        }));
    });
}

fn best_effort_restore() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
    let _ = crossterm::execute!(
        stdout,
        crossterm::cursor::Show,
        crossterm::terminal::LeaveAlternateScreen
    );
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

/// Write one full frame to `out`.
///
/// Rows are addressed absolutely, so a frame is self-contained and no
/// diffing against the previous frame is needed. Continuation cells
/// behind wide glyphs are skipped.
pub fn present(out: &mut impl Write, buf: &Buffer) -> io::Result<()> {
    let mut sgr = SgrState::default();
    for y in 0..buf.height() {
        write!(out, "\x1b[{};1H", y + 1)?;
        for cell in buf.row(y) {
            if cell.continuation {
                continue;
            }
            sgr.apply(out, cell.fg, cell.bg, cell.attrs)?;
            let mut encoded = [0u8; 4];
            out.write_all(cell.ch.encode_utf8(&mut encoded).as_bytes())?;
        }
        // Reset at end of row so trailing state never bleeds.
        write!(out, "\x1b[0m")?;
        sgr = SgrState::default();
    }
    out.flush()
}

/// Last emitted SGR state, so identical runs cost no bytes.
#[derive(Debug, PartialEq, Eq)]
struct SgrState {
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: StyleFlags,
}

impl Default for SgrState {
    fn default() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }
}

impl SgrState {
    fn apply(
        &mut self,
        out: &mut impl Write,
        fg: Option<Color>,
        bg: Option<Color>,
        attrs: StyleFlags,
    ) -> io::Result<()> {
        if self.fg == fg && self.bg == bg && self.attrs == attrs {
            return Ok(());
        }
        write!(out, "\x1b[0")?;
        if attrs.contains(StyleFlags::BOLD) {
            write!(out, ";1")?;
        }
        if attrs.contains(StyleFlags::DIM) {
            write!(out, ";2")?;
        }
        if attrs.contains(StyleFlags::ITALIC) {
            write!(out, ";3")?;
        }
        if attrs.contains(StyleFlags::UNDERLINE) {
            write!(out, ";4")?;
        }
        if attrs.contains(StyleFlags::REVERSE) {
            write!(out, ";7")?;
        }
        if let Some(c) = fg {
            write!(out, ";38;2;{};{};{}", c.r, c.g, c.b)?;
        }
        if let Some(c) = bg {
            write!(out, ";48;2;{};{};{}", c.r, c.g, c.b)?;
        }
        write!(out, "m")?;
        self.fg = fg;
        self.bg = bg;
        self.attrs = attrs;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::geometry::Rect;
    use vitrine_render::Cell;
    use vitrine_style::Style;

    #[test]
    fn present_addresses_every_row() {
        let buf = Buffer::new(4, 3);
        let mut out = Vec::new();
        present(&mut out, &buf).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[1;1H"));
        assert!(text.contains("\x1b[2;1H"));
        assert!(text.contains("\x1b[3;1H"));
    }

    #[test]
    fn present_emits_truecolor_sequences() {
        let mut buf = Buffer::new(4, 1);
        buf.set_style(
            Rect::from_size(4, 1),
            Style::new().fg(Color::rgb(10, 20, 30)).bg(Color::rgb(1, 2, 3)),
        );
        let mut out = Vec::new();
        present(&mut out, &buf).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("38;2;10;20;30"));
        assert!(text.contains("48;2;1;2;3"));
    }

    #[test]
    fn identical_runs_share_one_sequence() {
        let mut buf = Buffer::new(8, 1);
        buf.set_style(Rect::from_size(8, 1), Style::new().fg(Color::rgb(9, 9, 9)));
        let mut out = Vec::new();
        present(&mut out, &buf).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("38;2;9;9;9").count(), 1);
    }

    #[test]
    fn continuation_cells_are_skipped() {
        let mut buf = Buffer::new(4, 1);
        buf.set(0, 0, Cell::from_char('你'));
        buf.set(1, 0, Cell::continuation());
        buf.set(2, 0, Cell::from_char('a'));
        let mut out = Vec::new();
        present(&mut out, &buf).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("你a"));
    }
}
