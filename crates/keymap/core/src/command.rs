//! Opaque command identifiers returned by keymap lookups.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a bound action. The keymap never interprets it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(Cow<'static, str>);

impl Command {
	/// Creates a command from a static name without allocating.
	pub const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	/// Creates a command from an owned name.
	pub fn new(name: impl Into<String>) -> Self {
		Self(Cow::Owned(name.into()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Command {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for Command {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Command({})", self.0)
	}
}

/// Commands bound by the platform default keymap.
pub mod commands {
	use super::Command;

	/// Move the cursor or selection up.
	pub const MOVE_UP: Command = Command::from_static("move_up");
	/// Move the cursor or selection down.
	pub const MOVE_DOWN: Command = Command::from_static("move_down");
	/// Activate the focused item.
	pub const ACTIVATE: Command = Command::from_static("activate");
	/// Confirm the current input.
	pub const CONFIRM: Command = Command::from_static("confirm");
}
