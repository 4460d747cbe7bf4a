// Library surface for headless/integration tests and reuse.
// The binary only adds the CLI and the real terminal.
pub mod app;
pub mod error;
pub mod evaluator;
pub mod figure;
pub mod generator;
pub mod logging;
pub mod palette;
pub mod runtime;
pub mod session;
pub mod terminal;
pub mod ui;

pub use error::{Result, TermrushError};
