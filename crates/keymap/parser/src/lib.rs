//! Chord types and parsing for keymap definitions.
//!
//! A [`Chord`] is one key press: a [`Key`] plus a set of [`Modifiers`]. Chords are
//! written as `ctrl-k`, `meta-enter` or `f5`, and sequences of chords are separated by
//! whitespace (`ctrl-k ctrl-c`).

pub use node::{Chord, KEY_SEP, Key, MAX_FN_KEY, Modifier, Modifiers};
pub use parser::{ParseError, parse, parse_seq};

mod node;
mod parser;

/// Formats a chord sequence in its canonical, whitespace-separated form.
pub fn format_seq(chords: &[Chord]) -> String {
	let mut out = String::new();
	for (i, chord) in chords.iter().enumerate() {
		if i > 0 {
			out.push(' ');
		}
		out.push_str(&chord.to_string());
	}
	out
}
