//! Configuration section definitions.
//!
//! Each module corresponds to a section in `tola.toml`:
//!
//! | Module   | TOML Section | Purpose                                |
//! |----------|--------------|----------------------------------------|
//! | `target` | `[target]`   | Publish dir, url style, extensions     |

mod target;

pub use target::{TargetConfig, TargetConfigFields};
