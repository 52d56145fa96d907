//! `chordal check`: validates a keymap and lists its bindings.

use std::io::Write;

use chordal_keymap_core::parser::format_seq;
use chordal_keymap_core::{Command, Keymap};
use tracing::info;

/// Writes every binding as `<sequence>\t<commands>`, then one `warning:` line per conflict and
/// per unreachable binding.
pub fn run<W: Write + ?Sized>(keymap: &Keymap, out: &mut W) -> anyhow::Result<()> {
	for binding in keymap.bindings() {
		writeln!(out, "{}\t{}", format_seq(&binding.keys), join(binding.commands))?;
	}

	for conflict in keymap.conflicts() {
		writeln!(
			out,
			"warning: `{}` is bound more than once, dropped: {}",
			format_seq(&conflict.keys),
			join(&conflict.dropped)
		)?;
	}
	for entry in keymap.shadowed() {
		writeln!(
			out,
			"warning: `{}` can never fire, `{}` matches first",
			format_seq(&entry.keys),
			format_seq(&entry.shadowed_by)
		)?;
	}

	info!(
		bindings = keymap.len(),
		conflicts = keymap.conflicts().len(),
		shadowed = keymap.shadowed().len(),
		"keymap ok"
	);
	Ok(())
}

fn join(commands: &[Command]) -> String {
	commands.iter().map(Command::as_str).collect::<Vec<_>>().join(", ")
}
