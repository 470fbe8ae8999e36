//! Crossterm render backend and input poller for the Krill automata.
//!
//! [`CrosstermSurface`] implements the core [`Surface`] boundary over
//! a raw-mode alternate screen; [`spawn_input_poller`] translates raw
//! terminal events into the core [`InputEvent`] vocabulary on a
//! dedicated thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{self, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, event, execute, queue};

use krill_core::{Color, InputEvent, Key, Surface, SurfaceError};

/// How long the poller waits for an event before re-checking shutdown.
const POLL_PERIOD: Duration = Duration::from_millis(100);

fn init_err(err: io::Error) -> SurfaceError {
    SurfaceError::Init {
        reason: err.to_string(),
    }
}

fn io_err(err: io::Error) -> SurfaceError {
    SurfaceError::Io {
        reason: err.to_string(),
    }
}

/// A terminal render surface backed by crossterm.
///
/// Construction switches the terminal into raw mode on an alternate
/// screen with the cursor hidden; dropping the surface restores the
/// terminal. Cell writes are queued and become visible on `flush`.
pub struct CrosstermSurface {
    out: io::Stdout,
}

impl CrosstermSurface {
    /// Acquire the terminal.
    ///
    /// Fails with [`SurfaceError::Init`] when the terminal cannot be
    /// switched to raw mode (for example, not a tty). Fatal for the
    /// caller: there is no render surface to fall back to.
    pub fn new() -> Result<Self, SurfaceError> {
        terminal::enable_raw_mode().map_err(init_err)?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(init_err(err));
        }
        Ok(Self { out })
    }

    /// The terminal dimensions as `(cols, rows)`.
    pub fn size() -> Result<(u16, u16), SurfaceError> {
        terminal::size().map_err(init_err)
    }
}

impl Surface for CrosstermSurface {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        queue!(self.out, Clear(ClearType::All)).map_err(io_err)
    }

    fn set_cell(
        &mut self,
        col: u16,
        row: u16,
        symbol: char,
        fg: Color,
        bg: Color,
    ) -> Result<(), SurfaceError> {
        queue!(
            self.out,
            cursor::MoveTo(col, row),
            SetForegroundColor(palette(fg)),
            SetBackgroundColor(palette(bg)),
            style::Print(symbol),
        )
        .map_err(io_err)
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        self.out.flush().map_err(io_err)
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Map the core palette onto crossterm colors.
fn palette(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Yellow => style::Color::Yellow,
        Color::Blue => style::Color::Blue,
        Color::Magenta => style::Color::Magenta,
        Color::Cyan => style::Color::Cyan,
        Color::White => style::Color::White,
    }
}

/// Translate a raw terminal event into the controller's vocabulary.
fn translate(event: Event) -> Option<InputEvent> {
    let Event::Key(key) = event else {
        return Some(InputEvent::Other);
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let mapped = match key.code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::CtrlC,
        KeyCode::Char(c) => Key::Char(c),
        _ => return Some(InputEvent::Other),
    };
    Some(InputEvent::Key(mapped))
}

/// Spawn the input-polling thread.
///
/// The thread forwards translated events until `shutdown` is set or
/// the receiver is dropped. Poll errors terminate the stream, which
/// the controller treats as a quit signal.
pub fn spawn_input_poller(shutdown: Arc<AtomicBool>) -> (JoinHandle<()>, Receiver<InputEvent>) {
    let (tx, rx) = unbounded();
    let handle = thread::spawn(move || loop {
        if shutdown.load(Ordering::Acquire) {
            return;
        }
        match event::poll(POLL_PERIOD) {
            Ok(false) => {}
            Ok(true) => match event::read() {
                Ok(raw) => {
                    if let Some(translated) = translate(raw) {
                        if tx.send(translated).is_err() {
                            return;
                        }
                    }
                }
                Err(_) => return,
            },
            Err(_) => return,
        }
    });
    (handle, rx)
}

/// Acquire the terminal, build an automaton sized to it, and drive the
/// controller loop until the user quits.
///
/// `build` receives the terminal dimensions as `(rows, cols)`. All
/// setup failures (terminal init, automaton config) are fatal and
/// returned to the caller; a normal quit returns `Ok(())`.
pub fn run_in_terminal<F>(delay_ms: u64, build: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(usize, usize) -> Result<Box<dyn krill_core::Automaton>, krill_core::ConfigError>,
{
    let surface = CrosstermSurface::new()?;
    let (cols, rows) = CrosstermSurface::size()?;
    let automaton = build(usize::from(rows), usize::from(cols))?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let (poller, input_rx) = spawn_input_poller(Arc::clone(&shutdown));

    let delay = Arc::new(std::sync::atomic::AtomicU64::new(delay_ms));
    let mut controller =
        krill_engine::Controller::new(automaton, Box::new(surface), delay, input_rx);
    let result = controller.run();

    shutdown.store(true, Ordering::Release);
    let _ = poller.join();
    // Drop the controller (and with it the surface) before reporting,
    // so the terminal is restored ahead of any error output.
    drop(controller);
    result.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn key_translation() {
        assert_eq!(
            translate(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::Key(Key::Escape))
        );
        assert_eq!(
            translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Key(Key::CtrlC))
        );
        assert_eq!(
            translate(press(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(InputEvent::Key(Key::Char('c')))
        );
        assert_eq!(
            translate(press(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputEvent::Key(Key::ArrowUp))
        );
        assert_eq!(
            translate(press(KeyCode::Down, KeyModifiers::NONE)),
            Some(InputEvent::Key(Key::ArrowDown))
        );
    }

    #[test]
    fn unknown_events_are_other() {
        assert_eq!(
            translate(press(KeyCode::Home, KeyModifiers::NONE)),
            Some(InputEvent::Other)
        );
        assert_eq!(
            translate(Event::Resize(80, 24)),
            Some(InputEvent::Other)
        );
    }

    #[test]
    fn release_events_are_dropped() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(event), None);
    }
}
