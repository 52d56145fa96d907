use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[rstest]
#[case("a", Chord::char('a'))]
#[case("K", Chord::char('K'))]
#[case("-", Chord::char('-'))]
#[case("ctrl-k", Chord::ctrl('k'))]
#[case("Ctrl-k", Chord::ctrl('k'))]
#[case("control-k", Chord::ctrl('k'))]
#[case("ctrl--", Chord::ctrl('-'))]
#[case("alt-x", Chord::alt('x'))]
#[case("cmd-s", Chord::meta('s'))]
#[case("super-s", Chord::meta('s'))]
#[case("meta-enter", Chord::new(Modifiers::META, Key::Enter))]
#[case("ctrl-alt-del", Chord::new(Modifiers::CONTROL | Modifiers::ALT, Key::Delete))]
#[case("shift-tab", Chord::new(Modifiers::SHIFT, Key::Tab))]
#[case("f1", Chord::plain(Key::F(1)))]
#[case("f35", Chord::plain(Key::F(35)))]
#[case("ctrl-f12", Chord::new(Modifiers::CONTROL, Key::F(12)))]
#[case("f", Chord::char('f'))]
#[case("up", Chord::plain(Key::Up))]
#[case("pagedown", Chord::plain(Key::PageDown))]
#[case("Escape", Chord::plain(Key::Esc))]
#[case("space", Chord::plain(Key::Space))]
#[case("é", Chord::char('é'))]
fn parses_chord(#[case] input: &str, #[case] expected: Chord) {
	assert_eq!(parse(input), Ok(expected));
}

#[test]
fn modifier_order_does_not_matter() {
	assert_eq!(parse("shift-ctrl-a"), parse("ctrl-shift-a"));
}

#[test]
fn repeated_modifier_is_idempotent() {
	assert_eq!(parse("ctrl-ctrl-a"), Ok(Chord::ctrl('a')));
}

#[rstest]
#[case("", 0)]
#[case("ctrl-", 5)]
#[case("ab", 1)]
#[case("f0", 2)]
#[case("f36", 3)]
#[case("f1x", 2)]
#[case("delx", 1)]
fn rejects_invalid_chord(#[case] input: &str, #[case] position: usize) {
	let err = parse(input).unwrap_err();
	assert_eq!(err.position, position, "{input:?}: {err}");
}

#[test]
fn modifier_without_separator_is_not_a_modifier() {
	let err = parse("alt").unwrap_err();
	assert!(err.message.contains("end of input"), "{err}");
}

#[test]
fn parses_sequence() {
	assert_eq!(parse_seq("ctrl-k  ctrl-c"), Ok(vec![Chord::ctrl('k'), Chord::ctrl('c')]));
	assert_eq!(parse_seq("g g"), Ok(vec![Chord::char('g'), Chord::char('g')]));
}

#[test]
fn sequence_error_position_is_absolute() {
	let err = parse_seq("ctrl-k ctrl-").unwrap_err();
	assert_eq!(err.position, 12);
}

#[test]
fn empty_sequence_is_rejected() {
	assert!(parse_seq("   ").is_err());
	assert!(parse_seq("").is_err());
}

#[test]
fn from_str_delegates_to_parse() {
	let chord: Chord = "meta-up".parse().unwrap();
	assert_eq!(chord, Chord::new(Modifiers::META, Key::Up));
}
