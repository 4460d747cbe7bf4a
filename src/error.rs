use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermrushError {
    /// Raw mode or the alternate screen could not be set up. The game cannot
    /// run without unbuffered input, so this is always fatal.
    #[error("failed to configure terminal: {0}")]
    Terminal(#[source] io::Error),

    #[error("stdin must be a tty")]
    NotATty,

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, TermrushError>;
