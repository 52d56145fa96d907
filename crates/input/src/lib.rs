//! Shortcut resolution for live chord input.
//!
//! * [`ShortcutMatcher`]: the `process_input` / `reset` contract
//! * [`DefaultShortcutMatcher`]: longest-suffix-first matching against a shared [`Keymap`]
//! * [`SequenceBuffer`]: chords seen since the last match or reset

pub use buffer::SequenceBuffer;
pub use chordal_keymap_core::parser::{Chord, Key, Modifiers};
pub use chordal_keymap_core::{Command, Keymap, MatchResult};
pub use matcher::{DefaultShortcutMatcher, ShortcutMatcher};

pub mod buffer;
pub mod matcher;
