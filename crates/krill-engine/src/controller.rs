//! The generation/draw/input loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, select, Receiver, Sender};

use krill_core::{Automaton, InputEvent, Key, Surface, SurfaceError};

/// Floor for the generation delay, in milliseconds.
pub const MIN_DELAY_MS: u64 = 2;

/// Granularity of the timer thread's shutdown checks.
const TIMER_SLICE: Duration = Duration::from_millis(10);

/// The delay between generations, shared between the controller (which
/// adjusts it on user input) and the timer thread (which sleeps on it).
///
/// An atomic rather than a bare shared integer: the writer and the
/// reader live on different threads.
pub type SharedDelay = Arc<AtomicU64>;

/// What the loop should do after handling an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Break,
}

/// Owns an automaton and a render surface, and drives the
/// advance/draw/input cycle until the user quits.
pub struct Controller {
    automaton: Box<dyn Automaton>,
    surface: Box<dyn Surface>,
    delay_ms: SharedDelay,
    input_rx: Receiver<InputEvent>,
}

impl Controller {
    /// Assemble a controller.
    ///
    /// `input_rx` is the backend's event stream; the channel closing is
    /// treated as a quit signal (the input source is gone).
    pub fn new(
        automaton: Box<dyn Automaton>,
        surface: Box<dyn Surface>,
        delay_ms: SharedDelay,
        input_rx: Receiver<InputEvent>,
    ) -> Self {
        Self {
            automaton,
            surface,
            delay_ms,
            input_rx,
        }
    }

    /// Run the loop: draw one initial frame, then react to ticks and
    /// input until a quit signal arrives. The timer thread is joined
    /// before returning.
    pub fn run(&mut self) -> Result<(), SurfaceError> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let (timer, tick_rx) = spawn_timer(Arc::clone(&self.delay_ms), Arc::clone(&shutdown));

        let result = self.event_loop(&tick_rx);

        shutdown.store(true, Ordering::Release);
        drop(tick_rx);
        let _ = timer.join();

        result
    }

    fn event_loop(&mut self, tick_rx: &Receiver<()>) -> Result<(), SurfaceError> {
        let input_rx = self.input_rx.clone();
        self.draw_frame()?;

        loop {
            select! {
                recv(tick_rx) -> msg => {
                    if msg.is_err() {
                        break;
                    }
                    self.automaton.advance();
                    self.draw_frame()?;
                }
                recv(input_rx) -> msg => {
                    match msg {
                        Ok(event) => {
                            if self.handle_input(event) == Flow::Break {
                                break;
                            }
                        }
                        // Input source gone: nothing can ever quit the
                        // loop cleanly, so stop now.
                        Err(_) => break,
                    }
                }
            }
        }

        Ok(())
    }

    fn draw_frame(&mut self) -> Result<(), SurfaceError> {
        self.surface.clear()?;
        self.automaton.draw(self.surface.as_mut())?;
        self.surface.flush()
    }

    fn handle_input(&mut self, event: InputEvent) -> Flow {
        let InputEvent::Key(key) = event else {
            return Flow::Continue;
        };
        match key {
            Key::Escape | Key::CtrlC | Key::Char('q') => return Flow::Break,
            Key::ArrowUp => {
                let delay = self.delay_ms.load(Ordering::Relaxed);
                self.delay_ms.store(raise_delay(delay), Ordering::Relaxed);
            }
            Key::ArrowDown => {
                let delay = self.delay_ms.load(Ordering::Relaxed);
                self.delay_ms.store(lower_delay(delay), Ordering::Relaxed);
            }
            Key::Char('r') => self.automaton.randomize(),
            Key::Char(_) => {}
        }
        Flow::Continue
    }
}

/// Raise the delay one tier: ±1 below 10 ms, ±10 below 100 ms, ±100
/// beyond.
fn raise_delay(delay: u64) -> u64 {
    if delay < 10 {
        delay + 1
    } else if delay < 100 {
        delay + 10
    } else {
        delay + 100
    }
}

/// Lower the delay one tier, clamped at [`MIN_DELAY_MS`].
///
/// The clamp applies to the result, not just the lowest tier: stepping
/// down from 101 or 11 lands on the floor, never below it.
fn lower_delay(delay: u64) -> u64 {
    let lowered = if delay > 100 {
        delay - 100
    } else if delay > 10 {
        delay - 10
    } else if delay > MIN_DELAY_MS {
        delay - 1
    } else {
        delay
    };
    lowered.max(MIN_DELAY_MS)
}

/// Spawn the timer thread: sleep for the current delay, send a tick,
/// repeat. Sleeps in short slices so a shutdown request is honored
/// promptly, and exits when the tick receiver is dropped.
fn spawn_timer(delay_ms: SharedDelay, shutdown: Arc<AtomicBool>) -> (JoinHandle<()>, Receiver<()>) {
    let (tick_tx, tick_rx): (Sender<()>, Receiver<()>) = bounded(1);
    let handle = thread::spawn(move || loop {
        let period = Duration::from_millis(delay_ms.load(Ordering::Relaxed).max(MIN_DELAY_MS));
        let start = Instant::now();
        while start.elapsed() < period {
            if shutdown.load(Ordering::Acquire) {
                return;
            }
            thread::sleep(TIMER_SLICE.min(period.saturating_sub(start.elapsed())));
        }
        if tick_tx.send(()).is_err() {
            return;
        }
    });
    (handle, tick_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use krill_core::Color;
    use std::sync::Mutex;

    // ── Delay tier tests ────────────────────────────────────────

    #[test]
    fn raise_delay_tiers() {
        assert_eq!(raise_delay(2), 3);
        assert_eq!(raise_delay(9), 10);
        assert_eq!(raise_delay(10), 20);
        assert_eq!(raise_delay(99), 109);
        assert_eq!(raise_delay(100), 200);
        assert_eq!(raise_delay(1000), 1100);
    }

    #[test]
    fn lower_delay_tiers_and_floor() {
        assert_eq!(lower_delay(1000), 900);
        assert_eq!(lower_delay(100), 90);
        assert_eq!(lower_delay(10), 9);
        assert_eq!(lower_delay(3), 2);
        assert_eq!(lower_delay(MIN_DELAY_MS), MIN_DELAY_MS);
        // The tier boundaries would step below the floor without the
        // result clamp.
        assert_eq!(lower_delay(101), MIN_DELAY_MS);
        assert_eq!(lower_delay(11), MIN_DELAY_MS);
    }

    // ── Loop tests ──────────────────────────────────────────────

    /// Records surface calls so tests can count frames.
    #[derive(Default)]
    struct RecordingSurface {
        frames: Arc<Mutex<Frames>>,
    }

    #[derive(Default)]
    struct Frames {
        clears: usize,
        flushes: usize,
        cells: usize,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) -> Result<(), SurfaceError> {
            self.frames.lock().unwrap().clears += 1;
            Ok(())
        }

        fn set_cell(
            &mut self,
            _col: u16,
            _row: u16,
            _symbol: char,
            _fg: Color,
            _bg: Color,
        ) -> Result<(), SurfaceError> {
            self.frames.lock().unwrap().cells += 1;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), SurfaceError> {
            self.frames.lock().unwrap().flushes += 1;
            Ok(())
        }
    }

    /// Counts advance/randomize calls; draws a single cell per frame.
    #[derive(Default)]
    struct CountingAutomaton {
        counts: Arc<Mutex<Counts>>,
    }

    #[derive(Default)]
    struct Counts {
        advances: usize,
        randomizes: usize,
    }

    impl Automaton for CountingAutomaton {
        fn advance(&mut self) {
            self.counts.lock().unwrap().advances += 1;
        }

        fn randomize(&mut self) {
            self.counts.lock().unwrap().randomizes += 1;
        }

        fn draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
            surface.set_cell(0, 0, 'O', Color::Default, Color::Default)
        }
    }

    fn harness(
        delay_ms: u64,
    ) -> (
        Controller,
        Sender<InputEvent>,
        Arc<Mutex<Frames>>,
        Arc<Mutex<Counts>>,
        SharedDelay,
    ) {
        let surface = RecordingSurface::default();
        let frames = Arc::clone(&surface.frames);
        let automaton = CountingAutomaton::default();
        let counts = Arc::clone(&automaton.counts);
        let delay = Arc::new(AtomicU64::new(delay_ms));
        let (input_tx, input_rx) = unbounded();
        let controller = Controller::new(
            Box::new(automaton),
            Box::new(surface),
            Arc::clone(&delay),
            input_rx,
        );
        (controller, input_tx, frames, counts, delay)
    }

    #[test]
    fn quit_key_ends_the_loop() {
        let (mut controller, input_tx, frames, _counts, _delay) = harness(10_000);
        input_tx.send(InputEvent::Key(Key::Char('q'))).unwrap();
        controller.run().unwrap();
        // The initial frame was drawn even though no tick fired.
        let frames = frames.lock().unwrap();
        assert_eq!(frames.clears, 1);
        assert_eq!(frames.flushes, 1);
    }

    #[test]
    fn escape_and_ctrl_c_also_quit() {
        for key in [Key::Escape, Key::CtrlC] {
            let (mut controller, input_tx, _frames, _counts, _delay) = harness(10_000);
            input_tx.send(InputEvent::Key(key)).unwrap();
            controller.run().unwrap();
        }
    }

    #[test]
    fn closed_input_channel_ends_the_loop() {
        let (mut controller, input_tx, _frames, _counts, _delay) = harness(10_000);
        drop(input_tx);
        controller.run().unwrap();
    }

    #[test]
    fn ticks_advance_and_draw() {
        let (mut controller, input_tx, frames, counts, _delay) = harness(MIN_DELAY_MS);
        let quitter = thread::spawn(move || {
            thread::sleep(Duration::from_millis(150));
            let _ = input_tx.send(InputEvent::Key(Key::Escape));
        });
        controller.run().unwrap();
        quitter.join().unwrap();

        let counts = counts.lock().unwrap();
        let frames = frames.lock().unwrap();
        assert!(counts.advances >= 1, "no tick fired within 150ms");
        // One frame per advance plus the initial frame.
        assert_eq!(frames.flushes, counts.advances + 1);
        assert_eq!(frames.clears, frames.flushes);
        assert_eq!(frames.cells, frames.flushes);
    }

    #[test]
    fn r_key_randomizes_and_arrows_adjust_delay() {
        let (mut controller, input_tx, _frames, counts, delay) = harness(10_000);
        input_tx.send(InputEvent::Key(Key::Char('r'))).unwrap();
        input_tx.send(InputEvent::Key(Key::ArrowDown)).unwrap();
        input_tx.send(InputEvent::Other).unwrap();
        input_tx.send(InputEvent::Key(Key::Char('x'))).unwrap();
        input_tx.send(InputEvent::Key(Key::Escape)).unwrap();
        controller.run().unwrap();

        assert_eq!(counts.lock().unwrap().randomizes, 1);
        assert_eq!(delay.load(Ordering::Relaxed), 9_900);
    }

    #[test]
    fn delay_clamps_at_the_floor() {
        let (mut controller, input_tx, _frames, _counts, delay) = harness(4);
        for _ in 0..10 {
            input_tx.send(InputEvent::Key(Key::ArrowDown)).unwrap();
        }
        input_tx.send(InputEvent::Key(Key::Char('q'))).unwrap();
        controller.run().unwrap();
        assert_eq!(delay.load(Ordering::Relaxed), MIN_DELAY_MS);
    }
}
