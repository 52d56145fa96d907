//! TOML keymap files.
//!
//! ```toml
//! inherit_defaults = true
//!
//! [bindings]
//! "ctrl-k ctrl-c" = "toggle_comment"
//! "ctrl-x ctrl-s" = ["save", "format"]
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{Command, Keymap, KeymapError};


/// Errors raised while loading a keymap file.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read keymap file {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid keymap TOML")]
	Toml(#[from] toml::de::Error),
	#[error(transparent)]
	Keymap(#[from] KeymapError),
}

/// Commands bound to one sequence: a single name or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundCommands {
	One(Command),
	Many(Vec<Command>),
}

impl BoundCommands {
	pub fn into_vec(self) -> Vec<Command> {
		match self {
			BoundCommands::One(command) => vec![command],
			BoundCommands::Many(commands) => commands,
		}
	}
}

/// Parsed keymap file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeymapConfig {
	/// Layer the bindings over [`Keymap::platform_default`].
	pub inherit_defaults: bool,
	/// Key sequence text to commands, in file order. A later entry that spells the same
	/// sequence differently replaces an earlier one.
	pub bindings: IndexMap<String, BoundCommands>,
}

impl Default for KeymapConfig {
	fn default() -> Self {
		Self {
			inherit_defaults: true,
			bindings: IndexMap::new(),
		}
	}
}

impl KeymapConfig {
	/// Parses keymap TOML.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] for malformed documents or unknown fields.
	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a keymap file.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as [`Self::from_toml`].
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml(&text)?;
		debug!(path = %path.display(), bindings = config.bindings.len(), "loaded keymap file");
		Ok(config)
	}

	/// Builds the keymap. Configured bindings take precedence over inherited defaults.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Keymap`] for unparsable sequences or empty command lists.
	pub fn into_keymap(self) -> Result<Keymap, ConfigError> {
		let mut builder = Keymap::builder();
		for (keys, commands) in self.bindings {
			builder.bind_str(&keys, commands.into_vec())?;
		}
		if self.inherit_defaults {
			builder.fill_defaults();
		}
		Ok(builder.build())
	}
}
