//! Pending chord history.

use std::num::NonZeroUsize;

use chordal_keymap_core::parser::Chord;
use smallvec::SmallVec;

/// Chords reported since the last match or reset, oldest first.
///
/// Append-only until cleared. An optional limit drops the oldest chord once the buffer is
/// full; without one the buffer grows for as long as input goes unmatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuffer {
	chords: SmallVec<[Chord; 4]>,
	limit: Option<NonZeroUsize>,
}

impl SequenceBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	/// A buffer holding at most `limit` chords. A limit of 0 is treated as 1.
	pub fn with_limit(limit: usize) -> Self {
		Self {
			chords: SmallVec::new(),
			limit: Some(NonZeroUsize::new(limit).unwrap_or(NonZeroUsize::MIN)),
		}
	}

	pub fn limit(&self) -> Option<usize> {
		self.limit.map(NonZeroUsize::get)
	}

	pub fn push(&mut self, chord: Chord) {
		if let Some(limit) = self.limit
			&& self.chords.len() >= limit.get()
		{
			let excess = self.chords.len() + 1 - limit.get();
			self.chords.drain(..excess);
		}
		self.chords.push(chord);
	}

	pub fn clear(&mut self) {
		self.chords.clear();
	}

	pub fn as_slice(&self) -> &[Chord] {
		&self.chords
	}

	pub fn len(&self) -> usize {
		self.chords.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chords.is_empty()
	}

	/// Views over the trailing chords, longest first, down to the newest chord alone.
	pub fn suffixes(&self) -> impl Iterator<Item = &[Chord]> + '_ {
		(0..self.chords.len()).map(move |start| &self.chords[start..])
	}
}
