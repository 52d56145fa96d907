mod check;
mod cli;
mod keymap_source;
mod replay;

use std::io::Write;
use std::sync::Arc;

use chordal_input::DefaultShortcutMatcher;
use clap::Parser;
use cli::{Cli, Command};
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let keymap = Arc::new(keymap_source::load_keymap(cli.keymap.as_deref())?);
	debug!(bindings = keymap.len(), "keymap ready");

	let stdout = std::io::stdout();
	let mut out = stdout.lock();

	match cli.command {
		Command::Check => check::run(&keymap, &mut out)?,
		Command::Replay { history_limit, chords } => {
			let mut matcher = DefaultShortcutMatcher::new(keymap);
			if let Some(limit) = history_limit {
				matcher = matcher.with_history_limit(limit);
			}

			if chords.is_empty() {
				replay::replay_lines(&mut matcher, std::io::stdin().lock(), &mut out)?;
			} else {
				replay::replay_tokens(&mut matcher, chords.iter().map(String::as_str), &mut out)?;
			}
		}
	}

	out.flush()?;
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("chordal=debug")
		} else {
			EnvFilter::new("chordal=info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
