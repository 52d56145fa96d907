//! Longest-suffix shortcut matcher.

use std::sync::Arc;

use chordal_keymap_core::parser::Chord;
use chordal_keymap_core::{Command, Keymap, MatchResult};
use tracing::{debug, trace};

use crate::buffer::SequenceBuffer;


/// Resolves a live stream of chords into bound commands.
///
/// Both operations are total: "no match" is an empty slice, never an error.
pub trait ShortcutMatcher {
	/// Records `chord` and returns the commands it completes, if any.
	fn process_input(&mut self, chord: Chord) -> &[Command];

	/// Drops any partially typed shortcut.
	fn reset(&mut self);
}

/// Matches the longest bound suffix of the chords typed since the last match.
///
/// After each chord the buffered history is tried against the keymap from its longest
/// suffix down to the newest chord alone. The first bound suffix wins and clears the whole
/// history. When nothing matches, the history is kept so later chords can extend it.
///
/// One instance must not be driven from several threads at once. The [`Keymap`] itself is
/// shared read-only and may back any number of matchers.
#[derive(Debug, Clone)]
pub struct DefaultShortcutMatcher {
	keymap: Arc<Keymap>,
	buffer: SequenceBuffer,
}

impl Default for DefaultShortcutMatcher {
	fn default() -> Self {
		Self::new(Arc::new(Keymap::platform_default()))
	}
}

impl DefaultShortcutMatcher {
	pub fn new(keymap: Arc<Keymap>) -> Self {
		Self {
			keymap,
			buffer: SequenceBuffer::new(),
		}
	}

	/// Caps the pending history at `limit` chords, discarding the oldest beyond that.
	///
	/// Unbounded by default. With a cap, a binding longer than `limit` can no longer match.
	pub fn with_history_limit(mut self, limit: usize) -> Self {
		let mut buffer = SequenceBuffer::with_limit(limit);
		for &chord in self.buffer.as_slice() {
			buffer.push(chord);
		}
		self.buffer = buffer;
		self
	}

	pub fn keymap(&self) -> &Arc<Keymap> {
		&self.keymap
	}

	/// Chords typed since the last match or reset, oldest first.
	pub fn pending(&self) -> &[Chord] {
		self.buffer.as_slice()
	}

	/// Classifies the pending chords against the keymap, e.g. for a which-key display.
	///
	/// Suffixes are tried longest first, as in [`ShortcutMatcher::process_input`], so unbound
	/// chords typed before a shortcut prefix do not hide it. Returns the first suffix that is
	/// bound or a prefix of a binding, together with its classification.
	pub fn resolve_pending(&self) -> Option<(&[Chord], MatchResult<'_>)> {
		self.buffer.suffixes().find_map(|keys| match self.keymap.resolve(keys) {
			MatchResult::None => None,
			result => Some((keys, result)),
		})
	}
}

impl ShortcutMatcher for DefaultShortcutMatcher {
	fn process_input(&mut self, chord: Chord) -> &[Command] {
		self.buffer.push(chord);
		trace!(%chord, pending = self.buffer.len(), "shortcut input");

		let keymap: &Keymap = &self.keymap;
		let hit = self.buffer.suffixes().find_map(|keys| {
			let commands = keymap.lookup(keys);
			(!commands.is_empty()).then_some((keys, commands))
		});

		let Some((keys, commands)) = hit else {
			return &[];
		};

		debug!(?keys, ?commands, "shortcut matched");
		self.buffer.clear();
		commands
	}

	fn reset(&mut self) {
		if !self.buffer.is_empty() {
			debug!(discarded = self.buffer.len(), "shortcut input reset");
		}
		self.buffer.clear();
	}
}
