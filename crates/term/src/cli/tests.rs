use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn parse_check() {
	let cli = Cli::try_parse_from(["chordal", "check"]).unwrap();
	assert_eq!(cli.command, Command::Check);
	assert_eq!(cli.keymap, None);
	assert!(!cli.verbose);
}

#[test]
fn keymap_flag_is_global() {
	let cli = Cli::try_parse_from(["chordal", "check", "--keymap", "keys.toml", "-v"]).unwrap();
	assert_eq!(cli.keymap, Some(PathBuf::from("keys.toml")));
	assert!(cli.verbose);
}

#[test]
fn parse_replay_chords() {
	let cli = Cli::try_parse_from(["chordal", "replay", "ctrl-k", "ctrl-c"]).unwrap();
	assert_eq!(
		cli.command,
		Command::Replay {
			history_limit: None,
			chords: vec!["ctrl-k".to_string(), "ctrl-c".to_string()],
		}
	);
}

#[test]
fn parse_replay_history_limit() {
	let cli = Cli::try_parse_from(["chordal", "replay", "--history-limit", "3"]).unwrap();
	assert_eq!(
		cli.command,
		Command::Replay {
			history_limit: Some(3),
			chords: Vec::new(),
		}
	);
}

#[test]
fn subcommand_is_required() {
	assert!(Cli::try_parse_from(["chordal"]).is_err());
}

#[test]
fn verify_cli_schema() {
	use clap::CommandFactory;
	Cli::command().debug_assert();
}
