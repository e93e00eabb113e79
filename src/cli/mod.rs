//! Command-line interface module.

mod args;
pub mod translate;

pub use args::{Cli, Commands, TranslateArgs};
