//! Replays chord text through a shortcut matcher.

use std::io::{BufRead, Write};

use anyhow::Context;
use chordal_input::{Chord, Command, ShortcutMatcher};

/// Token that resets the matcher instead of being parsed as a chord.
pub const RESET_TOKEN: &str = "reset";

/// Feeds each token to `matcher`, writing `<chord>\t<commands>` per chord.
pub fn replay_tokens<'a, M, W>(matcher: &mut M, tokens: impl IntoIterator<Item = &'a str>, out: &mut W) -> anyhow::Result<()>
where
	M: ShortcutMatcher + ?Sized,
	W: Write + ?Sized,
{
	for token in tokens {
		if token == RESET_TOKEN {
			matcher.reset();
			continue;
		}

		let chord: Chord = token.parse().with_context(|| format!("invalid chord `{token}`"))?;
		let commands = matcher.process_input(chord);
		writeln!(out, "{chord}\t{}", format_commands(commands))?;
	}
	Ok(())
}

/// Replays line-oriented input. A blank line resets the matcher.
pub fn replay_lines<M, R, W>(matcher: &mut M, input: R, out: &mut W) -> anyhow::Result<()>
where
	M: ShortcutMatcher + ?Sized,
	R: BufRead,
	W: Write + ?Sized,
{
	for line in input.lines() {
		let line = line.context("failed to read input")?;
		if line.trim().is_empty() {
			matcher.reset();
			continue;
		}
		replay_tokens(matcher, line.split_whitespace(), out)?;
	}
	Ok(())
}

fn format_commands(commands: &[Command]) -> String {
	if commands.is_empty() {
		return "-".to_string();
	}
	commands.iter().map(Command::as_str).collect::<Vec<_>>().join(", ")
}
