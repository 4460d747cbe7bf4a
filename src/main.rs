use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::tty::IsTty;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use termrush::{
    app::{run, App},
    logging,
    runtime::{CrosstermEventSource, MonotonicClock, Runner},
    session::SessionConfig,
    terminal::{install_panic_hook, TerminalGuard},
    TermrushError,
};

/// match each shape against its true color before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal reflex game. Two figures are shown each round: pick the one drawn in its own color, or, if neither is, the figure missing from both."
)]
pub struct Cli {
    /// seed for the round generator, for reproducible games
    #[clap(long)]
    seed: Option<u64>,

    /// append diagnostics to this file (nothing is logged otherwise)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// how much to log when --log-file is given
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, TermrushError::NotATty).exit();
    }

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level.into())?;
    }
    info!("starting, seed {:?}, log level {}", cli.seed, cli.log_level);

    let config = SessionConfig::default();
    config.validate()?;

    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config, cli.rng());
    let mut runner = Runner::new(CrosstermEventSource::new(), MonotonicClock::new());
    let result = run(&mut terminal, &mut app, &mut runner);

    drop(terminal);
    drop(guard);
    result?;

    info!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rand::Rng;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["termrush"]);

        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_seed() {
        let cli = Cli::parse_from(["termrush", "--seed", "42"]);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_cli_logging_flags() {
        let cli = Cli::parse_from([
            "termrush",
            "--log-file",
            "/tmp/termrush.log",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/termrush.log")));
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_cli_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["termrush", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let cli = Cli::parse_from(["termrush", "--seed", "7"]);
        let a: Vec<u32> = cli.rng().sample_iter(rand::distributions::Standard).take(4).collect();
        let b: Vec<u32> = cli.rng().sample_iter(rand::distributions::Standard).take(4).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_cli_command_is_valid() {
        Cli::command().debug_assert();
    }
}
