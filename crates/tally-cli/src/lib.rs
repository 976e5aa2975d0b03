//! Interactive shell for tally
//!
//! Wraps a `tally-core` session in a console loop: menu, selector parsing,
//! value printing and single-step undo.

pub mod error;
pub mod logging;
pub mod output;
pub mod repl;

pub use error::{CliError, CliResult};
pub use repl::Repl;
