//! Locates and loads the keymap used by the CLI.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chordal_keymap_core::{Keymap, KeymapConfig};
use tracing::{debug, info};

/// Environment variable naming a keymap file.
pub const KEYMAP_ENV: &str = "CHORDAL_KEYMAP";

/// Picks the keymap file to load.
///
/// Order: explicit path, then a non-empty `env` value, then `keymap.toml` under
/// `config_dir/chordal` if that file exists. `None` means the platform defaults apply.
pub fn resolve_path(explicit: Option<&Path>, env: Option<OsString>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
	if let Some(path) = explicit {
		return Some(path.to_path_buf());
	}
	if let Some(path) = env.filter(|value| !value.is_empty()) {
		return Some(PathBuf::from(path));
	}
	config_dir.map(|dir| dir.join("chordal").join("keymap.toml")).filter(|path| path.is_file())
}

/// Loads the configured keymap, falling back to [`Keymap::platform_default`].
pub fn load_keymap(explicit: Option<&Path>) -> anyhow::Result<Keymap> {
	let Some(path) = resolve_path(explicit, std::env::var_os(KEYMAP_ENV), dirs::config_dir()) else {
		debug!("no keymap file found, using platform defaults");
		return Ok(Keymap::platform_default());
	};

	info!(path = %path.display(), "loading keymap");
	let config = KeymapConfig::load(&path)?;
	config
		.into_keymap()
		.with_context(|| format!("invalid keymap {}", path.display()))
}
