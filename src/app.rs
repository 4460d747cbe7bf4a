use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};

use crate::error::Result;
use crate::runtime::{Clock, EventSource, GameEvent, Runner};
use crate::session::{Session, SessionConfig, SessionSummary};
use crate::ui;

#[derive(Debug, Clone)]
pub enum AppState {
    /// Waiting for the player to start, open help or quit.
    Menu,
    Help,
    Playing(Session),
    Summary {
        summary: SessionSummary,
        ended_at: Duration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Owns the game state between frames. Every method takes the current clock
/// reading, so nothing here looks at real time.
#[derive(Debug)]
pub struct App<R: Rng> {
    pub config: SessionConfig,
    pub state: AppState,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(config: SessionConfig, rng: R) -> Self {
        Self {
            config,
            state: AppState::Menu,
            rng,
        }
    }

    /// How long the loop may wait for input: a tick while something on screen
    /// changes with time, forever otherwise.
    pub fn poll_timeout(&self, now: Duration) -> Option<Duration> {
        match &self.state {
            AppState::Playing(_) => Some(self.config.tick),
            AppState::Summary { ended_at, .. } if !self.is_settled(*ended_at, now) => {
                Some(self.config.tick)
            }
            _ => None,
        }
    }

    pub fn is_settled(&self, ended_at: Duration, now: Duration) -> bool {
        now.saturating_sub(ended_at) >= self.config.settle_delay
    }

    /// Ends the running session once its clock, penalties included, is spent.
    pub fn on_tick(&mut self, now: Duration) {
        if let AppState::Playing(session) = &self.state {
            if session.is_over(now) {
                self.end_session(now, false);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("interrupted");
            return Control::Quit;
        }

        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };

        match &mut self.state {
            AppState::Menu => match code {
                KeyCode::Char('s') => {
                    let session = Session::new(&mut self.rng, self.config.duration, now);
                    self.state = AppState::Playing(session);
                }
                KeyCode::Char('h') => self.state = AppState::Help,
                KeyCode::Char('q') => return Control::Quit,
                _ => {}
            },
            AppState::Help => self.state = AppState::Menu,
            AppState::Playing(session) => match code {
                KeyCode::Char('a') | KeyCode::Left => session.move_left(),
                KeyCode::Char('d') | KeyCode::Right => session.move_right(),
                KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                    session.confirm(&mut self.rng);
                    if session.is_over(now) {
                        self.end_session(now, false);
                    }
                }
                KeyCode::Char('q') => self.end_session(now, true),
                _ => {}
            },
            AppState::Summary { ended_at, .. } => {
                // Keys pressed while the result settles are swallowed.
                if now.saturating_sub(*ended_at) >= self.config.settle_delay {
                    self.state = AppState::Menu;
                }
            }
        }

        Control::Continue
    }

    fn end_session(&mut self, now: Duration, quit_early: bool) {
        if let AppState::Playing(session) = &self.state {
            let summary = session.summary(quit_early);
            info!(
                "session ended{}: {} points, {} rounds, {}s penalty",
                if quit_early { " early" } else { "" },
                summary.score,
                summary.rounds_played,
                summary.penalty_secs
            );
            self.state = AppState::Summary {
                summary,
                ended_at: now,
            };
        }
    }
}

/// Drives `app` until the player quits: check the clock, draw, wait for one
/// event, dispatch it.
pub fn run<B, R, E, C>(
    terminal: &mut Terminal<B>,
    app: &mut App<R>,
    runner: &mut Runner<E, C>,
) -> Result<()>
where
    B: Backend,
    R: Rng,
    E: EventSource,
    C: Clock,
{
    loop {
        let now = runner.now();
        app.on_tick(now);
        terminal.draw(|f| ui::draw(app, now, f))?;

        let event = runner.step(app.poll_timeout(now))?;
        if let GameEvent::Key(key) = event {
            if app.handle_key(key, runner.now()) == Control::Quit {
                break;
            }
        }
    }

    Ok(())
}
