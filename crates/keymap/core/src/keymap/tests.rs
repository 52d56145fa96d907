use chordal_keymap_parser::{Key, parse_seq};
use pretty_assertions::assert_eq;

use super::*;
use crate::commands;

fn seq(text: &str) -> Vec<Chord> {
	parse_seq(text).unwrap()
}

fn cmd(name: &'static str) -> Command {
	Command::from_static(name)
}

fn sample() -> Keymap {
	let mut builder = Keymap::builder();
	builder.bind_str("ctrl-k ctrl-c", [cmd("toggle_comment")]).unwrap();
	builder.bind_str("ctrl-k ctrl-u", [cmd("uncomment")]).unwrap();
	builder.bind_str("g g", [cmd("goto_top")]).unwrap();
	builder.bind_str("g", [cmd("goto_mode")]).unwrap();
	builder.bind_str("ctrl-s", [cmd("save"), cmd("format")]).unwrap();
	builder.build()
}

#[test]
fn lookup_is_exact() {
	let keymap = sample();

	assert_eq!(keymap.lookup(&seq("ctrl-k ctrl-c")), &[cmd("toggle_comment")]);
	assert_eq!(keymap.lookup(&seq("ctrl-s")), &[cmd("save"), cmd("format")]);
	assert!(keymap.lookup(&seq("ctrl-k")).is_empty());
	assert!(keymap.lookup(&seq("ctrl-c")).is_empty());
	assert!(keymap.lookup(&seq("x ctrl-k ctrl-c")).is_empty());
	assert!(keymap.lookup(&[]).is_empty());
}

#[test]
fn resolve_classifies_sequences() {
	let keymap = sample();

	assert_eq!(keymap.resolve(&seq("ctrl-k")), MatchResult::Partial { has_value: false });
	assert_eq!(keymap.resolve(&seq("g")), MatchResult::Partial { has_value: true });
	assert_eq!(keymap.resolve(&seq("g g")), MatchResult::Complete(&[cmd("goto_top")]));
	assert_eq!(keymap.resolve(&seq("q")), MatchResult::None);
	assert_eq!(keymap.resolve(&[]), MatchResult::None);
}

#[test]
fn continuations_are_sorted() {
	let keymap = sample();

	let next = keymap.continuations(&seq("ctrl-k"));
	assert_eq!(
		next,
		vec![
			ContinuationEntry {
				chord: Chord::ctrl('c'),
				has_value: true,
			},
			ContinuationEntry {
				chord: Chord::ctrl('u'),
				has_value: true,
			},
		]
	);
	assert!(keymap.continuations(&seq("ctrl-s")).is_empty());
	assert!(keymap.continuations(&seq("z")).is_empty());
	assert_eq!(keymap.continuations(&[]).len(), 3);
}

#[test]
fn bindings_lists_every_sequence_in_text_order() {
	let keymap = sample();
	let listed: Vec<String> = keymap.bindings().iter().map(|binding| format_seq(&binding.keys)).collect();

	assert_eq!(listed, ["ctrl-k ctrl-c", "ctrl-k ctrl-u", "ctrl-s", "g", "g g"]);
	assert_eq!(keymap.len(), 5);
	assert!(!keymap.is_empty());
}

#[test]
fn later_binding_wins_and_conflict_is_recorded() {
	let mut builder = Keymap::builder();
	builder.bind_str("ctrl-k", [cmd("first")]).unwrap();
	builder.bind_str("Ctrl-k", [cmd("second")]).unwrap();
	let keymap = builder.build();

	assert_eq!(keymap.lookup(&seq("ctrl-k")), &[cmd("second")]);
	assert_eq!(keymap.len(), 1);
	assert_eq!(
		keymap.conflicts(),
		&[KeymapConflict {
			keys: seq("ctrl-k"),
			kept: vec![cmd("second")],
			dropped: vec![cmd("first")],
		}]
	);
}

#[test]
fn rejects_empty_bindings() {
	let mut builder = Keymap::builder();

	assert_eq!(builder.bind(Vec::new(), [cmd("x")]), Err(KeymapError::EmptySequence));
	assert_eq!(builder.bind_str("  ", [cmd("x")]), Err(KeymapError::EmptySequence));
	assert_eq!(
		builder.bind_str("ctrl-k", []),
		Err(KeymapError::EmptyCommands {
			keys: "ctrl-k".to_string()
		})
	);
	assert!(matches!(builder.bind_str("ctrl-", [cmd("x")]), Err(KeymapError::Parse { .. })));
	assert!(builder.build().is_empty());
}

#[test]
fn from_bindings_accepts_explicit_mapping() {
	let keymap = Keymap::from_bindings([(seq("ctrl-k ctrl-c"), vec![cmd("toggle_comment")]), (seq("up"), vec![commands::MOVE_UP])]).unwrap();

	assert_eq!(keymap.len(), 2);
	assert_eq!(keymap.lookup(&[Chord::plain(Key::Up)]), &[commands::MOVE_UP]);

	let err = Keymap::from_bindings([(seq("a"), Vec::<Command>::new())]).unwrap_err();
	assert_eq!(err, KeymapError::EmptyCommands { keys: "a".to_string() });
}

#[test]
fn bound_prefix_shadows_longer_binding() {
	let keymap = sample();

	assert_eq!(
		keymap.shadowed(),
		&[ShadowedBinding {
			keys: seq("g g"),
			shadowed_by: seq("g"),
		}]
	);
}

#[test]
fn bound_inner_window_shadows_binding() {
	let mut builder = Keymap::builder();
	builder.bind_str("a b c", [cmd("abc")]).unwrap();
	builder.bind_str("b", [cmd("b")]).unwrap();
	builder.bind_str("x c", [cmd("xc")]).unwrap();
	let keymap = builder.build();

	let shadowed: Vec<_> = keymap.shadowed().iter().map(|entry| format_seq(&entry.keys)).collect();
	assert_eq!(shadowed, ["a b c"]);
}

#[test]
fn bound_suffix_does_not_shadow() {
	let keymap = Keymap::from_bindings([(seq("b"), [cmd("one")]), (seq("a b"), [cmd("two")])]).unwrap();
	assert!(keymap.shadowed().is_empty());
}

#[test]
fn platform_default_bindings() {
	let keymap = Keymap::platform_default();

	assert_eq!(keymap.len(), 4);
	assert_eq!(keymap.lookup(&seq("up")), &[commands::MOVE_UP]);
	assert_eq!(keymap.lookup(&seq("down")), &[commands::MOVE_DOWN]);
	assert_eq!(keymap.lookup(&seq("enter")), &[commands::ACTIVATE]);
	assert_eq!(keymap.lookup(&seq("cmd-enter")), &[commands::CONFIRM]);
	assert!(keymap.conflicts().is_empty());
	assert!(keymap.shadowed().is_empty());
}

#[test]
fn fill_defaults_keeps_existing_bindings() {
	let mut builder = Keymap::builder();
	builder.bind_str("enter", [cmd("submit")]).unwrap();
	builder.fill_defaults();
	let keymap = builder.build();

	assert_eq!(keymap.lookup(&seq("enter")), &[cmd("submit")]);
	assert_eq!(keymap.len(), 4);
	assert!(keymap.conflicts().is_empty());
}

#[test]
fn keymap_is_shareable_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<Keymap>();
}
