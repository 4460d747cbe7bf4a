use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;

use crate::error::{Result, TermrushError};

/// Consecutive read failures tolerated before the input is considered gone.
pub const MAX_READ_FAILURES: u32 = 64;

/// Unified event type consumed by the app loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    /// Nothing arrived before the timeout.
    Tick,
}

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Source of terminal events (keyboard, resize).
pub trait EventSource {
    /// Waits up to `timeout` for an event, or indefinitely when `timeout` is
    /// `None`. `Ok(None)` means nothing usable arrived.
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<GameEvent>>;
}

/// Production event source reading crossterm events on the calling thread.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<GameEvent>> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout)? {
                return Ok(None);
            }
        }

        Ok(match event::read()? {
            // Release/repeat events are only reported on some platforms.
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => Some(GameEvent::Key(key)),
            CtEvent::Resize(_, _) => Some(GameEvent::Resize),
            _ => None,
        })
    }
}

/// One scripted input step.
#[derive(Clone, Debug)]
pub enum Step {
    /// Delivered immediately, without moving the clock.
    Event(GameEvent),
    /// Nothing arrives; the clock moves forward by the wait timeout.
    Idle,
    /// Moves the clock without consuming a wait.
    Sleep(Duration),
    /// The read fails with this error kind.
    Fail(io::ErrorKind),
}

/// Deterministic event source for tests. Waiting advances a [`ManualClock`]
/// instead of sleeping.
pub struct ScriptedEventSource {
    steps: VecDeque<Step>,
    clock: ManualClock,
}

impl ScriptedEventSource {
    pub fn new(clock: ManualClock, steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            clock,
        }
    }

    pub fn key(c: char) -> Step {
        Step::Event(GameEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    pub fn code(code: KeyCode) -> Step {
        Step::Event(GameEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn ctrl(c: char) -> Step {
        Step::Event(GameEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    /// `n` consecutive idle waits.
    pub fn idle(n: usize) -> impl Iterator<Item = Step> {
        std::iter::repeat(Step::Idle).take(n)
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<GameEvent>> {
        loop {
            match self.steps.pop_front() {
                Some(Step::Event(event)) => return Ok(Some(event)),
                Some(Step::Sleep(by)) => self.clock.advance(by),
                Some(Step::Idle) => {
                    if let Some(timeout) = timeout {
                        self.clock.advance(timeout);
                    }
                    return Ok(None);
                }
                Some(Step::Fail(kind)) => return Err(io::Error::new(kind, "scripted failure")),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input script exhausted",
                    ))
                }
            }
        }
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: EventSource, C: Clock> {
    event_source: E,
    clock: C,
    read_failures: u32,
}

impl<E: EventSource, C: Clock> Runner<E, C> {
    pub fn new(event_source: E, clock: C) -> Self {
        Self {
            event_source,
            clock,
            read_failures: 0,
        }
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn event_source(&self) -> &E {
        &self.event_source
    }

    /// Waits up to `timeout` and returns the next event, or `Tick` if none
    /// arrived. A failed read counts as no input; only a long unbroken run of
    /// failures is an error.
    pub fn step(&mut self, timeout: Option<Duration>) -> Result<GameEvent> {
        match self.event_source.next_event(timeout) {
            Ok(event) => {
                self.read_failures = 0;
                Ok(event.unwrap_or(GameEvent::Tick))
            }
            Err(err) => {
                self.read_failures += 1;
                if self.read_failures >= MAX_READ_FAILURES {
                    return Err(TermrushError::Io(err));
                }
                warn!("input read failed ({err}), treating as no input");
                Ok(GameEvent::Tick)
            }
        }
    }
}
