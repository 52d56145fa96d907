//! Built-in bindings shared by every host platform.

use chordal_keymap_parser::{Chord, Key, Modifiers};

use crate::command::commands;
use crate::{Command, Keymap, KeymapBuilder};

const DEFAULT_BINDINGS: [(Chord, Command); 4] = [
	(Chord::plain(Key::Up), commands::MOVE_UP),
	(Chord::plain(Key::Down), commands::MOVE_DOWN),
	(Chord::plain(Key::Enter), commands::ACTIVATE),
	(Chord::new(Modifiers::META, Key::Enter), commands::CONFIRM),
];

impl Keymap {
	/// The bindings used when no keymap is configured.
	///
	/// | chord        | command     |
	/// |--------------|-------------|
	/// | `up`         | `move_up`   |
	/// | `down`       | `move_down` |
	/// | `enter`      | `activate`  |
	/// | `meta-enter` | `confirm`   |
	pub fn platform_default() -> Self {
		let mut builder = Self::builder();
		builder.fill_defaults();
		builder.build()
	}
}

impl KeymapBuilder {
	/// Adds every platform default binding whose sequence is not bound yet.
	pub fn fill_defaults(&mut self) {
		for (chord, command) in DEFAULT_BINDINGS {
			self.insert_if_absent(&[chord], &[command]);
		}
	}
}
