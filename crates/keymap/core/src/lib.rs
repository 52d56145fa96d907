//! Keymaps from chord sequences to bound commands.
//!
//! * [`Keymap`]: immutable trie keyed by chord sequences, exact lookup only
//! * [`KeymapBuilder`]: validated construction, conflict and shadowing diagnostics
//! * [`KeymapConfig`]: TOML keymap files layered over the platform defaults

pub use chordal_keymap_parser as parser;
pub use command::{Command, commands};
pub use config::{ConfigError, KeymapConfig};
pub use error::KeymapError;
pub use keymap::{Binding, ContinuationEntry, Keymap, KeymapBuilder, KeymapConflict, MatchResult, ShadowedBinding};

mod command;
pub mod config;
mod defaults;
mod error;
mod keymap;
