//! Shared utilities.

mod plural;

pub use plural::plural_count;
