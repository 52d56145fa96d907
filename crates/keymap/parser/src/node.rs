//! Value types for a single chord.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};


/// Separator between modifiers and the key in the text form (`ctrl-k`).
pub const KEY_SEP: char = '-';

/// Highest function key number (`f35`).
pub const MAX_FN_KEY: u8 = 35;

bitflags! {
	/// Modifier keys held while a key is pressed.
	#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
	pub struct Modifiers: u8 {
		/// Meta, Command or Super.
		const META    = 0b0001;
		/// Control.
		const CONTROL = 0b0010;
		/// Alt or Option.
		const ALT     = 0b0100;
		/// Shift.
		const SHIFT   = 0b1000;
	}
}

impl fmt::Debug for Modifiers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return write!(f, "NONE");
		}
		bitflags::parser::to_writer(self, f)
	}
}

/// A single modifier name as written in keymap text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
	Meta,
	Ctrl,
	Alt,
	Shift,
}

impl Modifier {
	/// Canonical ordering used when formatting a chord.
	pub const ALL: [Modifier; 4] = [Modifier::Meta, Modifier::Ctrl, Modifier::Alt, Modifier::Shift];

	/// The flag this modifier sets.
	pub const fn flag(self) -> Modifiers {
		match self {
			Modifier::Meta => Modifiers::META,
			Modifier::Ctrl => Modifiers::CONTROL,
			Modifier::Alt => Modifiers::ALT,
			Modifier::Shift => Modifiers::SHIFT,
		}
	}

	/// Canonical text name.
	pub const fn name(self) -> &'static str {
		match self {
			Modifier::Meta => "meta",
			Modifier::Ctrl => "ctrl",
			Modifier::Alt => "alt",
			Modifier::Shift => "shift",
		}
	}
}

impl FromStr for Modifier {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"meta" | "cmd" | "super" => Ok(Modifier::Meta),
			"ctrl" | "control" => Ok(Modifier::Ctrl),
			"alt" | "opt" => Ok(Modifier::Alt),
			"shift" => Ok(Modifier::Shift),
			_ => Err(()),
		}
	}
}

/// Key identifier without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
	Char(char),
	/// Function key, F1-F35.
	F(u8),
	Backspace,
	BackTab,
	Delete,
	Down,
	End,
	Enter,
	Esc,
	Home,
	Insert,
	Left,
	PageDown,
	PageUp,
	Right,
	Space,
	Tab,
	Up,
}

impl Key {
	/// Canonical name for named keys, `None` for characters and function keys.
	pub const fn name(self) -> Option<&'static str> {
		Some(match self {
			Key::Char(_) | Key::F(_) => return None,
			Key::Backspace => "backspace",
			Key::BackTab => "backtab",
			Key::Delete => "del",
			Key::Down => "down",
			Key::End => "end",
			Key::Enter => "enter",
			Key::Esc => "esc",
			Key::Home => "home",
			Key::Insert => "ins",
			Key::Left => "left",
			Key::PageDown => "pgdn",
			Key::PageUp => "pgup",
			Key::Right => "right",
			Key::Space => "space",
			Key::Tab => "tab",
			Key::Up => "up",
		})
	}
}

impl FromStr for Key {
	type Err = ();

	/// Parses named keys only. Single characters and function keys are handled by the parser.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.to_ascii_lowercase().as_str() {
			"backspace" | "bs" => Key::Backspace,
			"backtab" => Key::BackTab,
			"del" | "delete" => Key::Delete,
			"down" => Key::Down,
			"end" => Key::End,
			"enter" | "ret" | "return" => Key::Enter,
			"esc" | "escape" => Key::Esc,
			"home" => Key::Home,
			"ins" | "insert" => Key::Insert,
			"left" => Key::Left,
			"pgdn" | "pagedown" => Key::PageDown,
			"pgup" | "pageup" => Key::PageUp,
			"right" => Key::Right,
			"space" | "spc" => Key::Space,
			"tab" => Key::Tab,
			"up" => Key::Up,
			_ => return Err(()),
		})
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Char(c) => write!(f, "{c}"),
			Key::F(n) => write!(f, "f{n}"),
			named => f.write_str(named.name().unwrap_or_default()),
		}
	}
}

/// One key press: a key together with the modifiers held at the time.
///
/// Built only through [`Chord::new`] and its shorthands, so the `Display` form always parses
/// back to the same chord.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chord {
	modifiers: Modifiers,
	key: Key,
}

impl Chord {
	/// Creates a chord.
	///
	/// Tab and line breaks become [`Key::Tab`] and [`Key::Enter`], any other whitespace
	/// character becomes [`Key::Space`], and function keys are clamped to F1-F35.
	pub const fn new(modifiers: Modifiers, key: Key) -> Self {
		let key = match key {
			Key::Char('\t') => Key::Tab,
			Key::Char('\n' | '\r') => Key::Enter,
			Key::Char(
				'\u{b}' | '\u{c}' | ' ' | '\u{85}' | '\u{a0}' | '\u{1680}' | '\u{2000}'..='\u{200a}' | '\u{2028}' | '\u{2029}'
				| '\u{202f}' | '\u{205f}' | '\u{3000}',
			) => Key::Space,
			Key::F(0) => Key::F(1),
			Key::F(n) if n > MAX_FN_KEY => Key::F(MAX_FN_KEY),
			other => other,
		};
		Self { modifiers, key }
	}

	/// A bare key with no modifiers.
	pub const fn plain(key: Key) -> Self {
		Self::new(Modifiers::empty(), key)
	}

	/// A bare character key.
	pub const fn char(c: char) -> Self {
		Self::plain(Key::Char(c))
	}

	/// Ctrl plus a character.
	pub const fn ctrl(c: char) -> Self {
		Self::new(Modifiers::CONTROL, Key::Char(c))
	}

	/// Alt plus a character.
	pub const fn alt(c: char) -> Self {
		Self::new(Modifiers::ALT, Key::Char(c))
	}

	/// Meta plus a character.
	pub const fn meta(c: char) -> Self {
		Self::new(Modifiers::META, Key::Char(c))
	}

	pub const fn modifiers(self) -> Modifiers {
		self.modifiers
	}

	pub const fn key(self) -> Key {
		self.key
	}

	/// Returns a copy with `modifiers` added.
	pub const fn with(self, modifiers: Modifiers) -> Self {
		Self::new(self.modifiers.union(modifiers), self.key)
	}
}

impl From<Key> for Chord {
	fn from(key: Key) -> Self {
		Chord::plain(key)
	}
}

impl fmt::Display for Chord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for modifier in Modifier::ALL {
			if self.modifiers.contains(modifier.flag()) {
				write!(f, "{}{KEY_SEP}", modifier.name())?;
			}
		}
		write!(f, "{}", self.key)
	}
}

impl fmt::Debug for Chord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Chord({self})")
	}
}

impl Serialize for Chord {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Chord {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		text.parse().map_err(serde::de::Error::custom)
	}
}
