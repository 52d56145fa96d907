//! CLI schema for the chordal binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "chordal")]
#[command(about = "Resolve keyboard chord sequences against a keymap")]
#[command(version)]
pub struct Cli {
	/// Keymap file (defaults to $CHORDAL_KEYMAP, then <config dir>/chordal/keymap.toml)
	#[arg(long, short, global = true, value_name = "PATH")]
	pub keymap: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Validate the keymap and list its bindings
	Check,
	/// Feed chords through a shortcut matcher and print what each one triggers
	///
	/// Reads whitespace-separated chords from stdin when none are given. A blank line,
	/// or the token `reset`, discards any partially typed shortcut.
	Replay {
		/// Keep at most N pending chords
		#[arg(long, value_name = "N")]
		history_limit: Option<usize>,

		/// Chords such as `ctrl-k ctrl-c`
		chords: Vec<String>,
	},
}
