use chordal_keymap_parser::ParseError;
use thiserror::Error;

/// Errors raised while building a [`Keymap`](crate::Keymap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
	/// A binding was given no chords.
	#[error("key sequence is empty")]
	EmptySequence,
	/// A binding was given no commands, which would be indistinguishable from no binding.
	#[error("binding for `{keys}` has no commands")]
	EmptyCommands { keys: String },
	/// A textual key sequence failed to parse.
	#[error("invalid key sequence `{input}`")]
	Parse {
		input: String,
		#[source]
		source: ParseError,
	},
}
