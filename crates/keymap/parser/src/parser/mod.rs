//! # Parser
//!
//! Turns plain-text chord definitions into [`Chord`] values. Accepts single chords such as
//! `"ctrl-alt-f1"` and whitespace-separated sequences such as `"ctrl-k ctrl-c"`.
//!
//! ## Supported Syntax
//!
//! ```text
//! chord     = modifiers* key
//! modifiers = modifier "-"
//! modifier  = "meta" | "cmd" | "super" | "ctrl" | "alt" | "shift"
//! key       = fn-key | named-key | char
//! fn-key    = "f" digit digit?
//! named-key = "del" | "insert" | "end" | "enter" | ...
//! char      = any non-whitespace char
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::node::{Chord, KEY_SEP, Key, MAX_FN_KEY, Modifier, Modifiers};

#[cfg(test)]
mod tests;

/// Function pointer type for parser combinators.
type ParserFn<T> = fn(&mut Parser) -> Result<Option<T>, ParseError>;

/// Error produced when chord text does not match the grammar.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("parse error at position {position}: {message}")]
pub struct ParseError {
	/// Human-readable description of the parse error.
	pub message: String,
	/// Byte offset in the input where the error occurred.
	pub position: usize,
}

/// Recursive descent state over the remaining input.
struct Parser<'a> {
	input: &'a str,
	/// Current byte position in the full input.
	position: usize,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	fn peek_at(&self, n: usize) -> Option<char> {
		self.input.chars().nth(n)
	}

	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	/// Consumes the next character if it matches the expected one.
	fn take(&mut self, expected: char) -> Result<(), ParseError> {
		match self.next() {
			Some(ch) if ch == expected => Ok(()),
			Some(ch) => Err(ParseError {
				message: format!("expected '{expected}', found '{ch}'"),
				position: self.position - ch.len_utf8(),
			}),
			None => Err(ParseError {
				message: format!("expected '{expected}', found end of input"),
				position: self.position,
			}),
		}
	}

	/// Runs `f`, restoring the parser state if it yields nothing or fails.
	fn try_parse<T, F>(&mut self, f: F) -> Result<Option<T>, ParseError>
	where
		F: FnOnce(&mut Parser<'a>) -> Result<Option<T>, ParseError>,
	{
		let snapshot = (self.input, self.position);
		match f(self) {
			Ok(Some(val)) => Ok(Some(val)),
			Ok(None) | Err(_) => {
				(self.input, self.position) = snapshot;
				Ok(None)
			}
		}
	}

	fn take_while<F>(&mut self, predicate: F) -> &'a str
	where
		F: Fn(char) -> bool,
	{
		let len = self.input.find(|ch| !predicate(ch)).unwrap_or(self.input.len());
		let (taken, rest) = self.input.split_at(len);
		self.input = rest;
		self.position += len;
		taken
	}

	/// Returns the result of the first parser that produces a value.
	fn alt<T>(&mut self, parsers: &[ParserFn<T>]) -> Result<Option<T>, ParseError> {
		for p in parsers {
			if let Some(value) = p(self)? {
				return Ok(Some(value));
			}
		}
		Ok(None)
	}

	fn error(&self, message: String) -> ParseError {
		ParseError {
			message,
			position: self.position,
		}
	}
}

/// Parses a single chord expression such as `"ctrl-b"`, `"meta-enter"` or `"f1"`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not match the grammar or has trailing input.
pub fn parse(s: &str) -> Result<Chord, ParseError> {
	let mut parser = Parser::new(s);
	let chord = parse_chord(&mut parser)?;

	if let Some(ch) = parser.peek() {
		return Err(parser.error(format!("expected end of input, found '{ch}'")));
	}

	Ok(chord)
}

/// Grammar: `chord = modifiers* key`
fn parse_chord(parser: &mut Parser) -> Result<Chord, ParseError> {
	let mut modifiers = Modifiers::empty();
	while let Some(modifier) = try_parse_modifier(parser)? {
		modifiers |= modifier.flag();
	}

	let key = parse_key(parser)?;
	Ok(Chord::new(modifiers, key))
}

/// Attempts to parse a single modifier followed by a `-`.
fn try_parse_modifier(parser: &mut Parser) -> Result<Option<Modifier>, ParseError> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphabetic());
		let Ok(modifier) = name.parse::<Modifier>() else {
			return Ok(None);
		};

		p.take(KEY_SEP)?;

		Ok(Some(modifier))
	})
}

fn parse_key(parser: &mut Parser) -> Result<Key, ParseError> {
	match parser.alt(&[try_parse_fn_key, try_parse_named_key, try_parse_char])? {
		Some(key) => Ok(key),
		None => Err(parser.error("expected a valid key".to_string())),
	}
}

/// Attempts to parse a function key (`"f1"` to `"f35"`).
///
/// Only activates when the input starts with `f` followed by a digit. Once activated, the
/// digits must form a valid function key number or an error is returned.
fn try_parse_fn_key(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	if parser.peek() != Some('f') {
		return Ok(None);
	}

	if !matches!(parser.peek_at(1), Some(ch) if ch.is_ascii_digit()) {
		return Ok(None);
	}

	parser.take('f')?;
	let num = parser.take_while(|ch| ch.is_ascii_digit());

	match num.parse::<u8>() {
		Ok(n) if (1..=MAX_FN_KEY).contains(&n) => Ok(Some(Key::F(n))),
		_ => Err(parser.error("invalid function key number (must be 1-35)".to_string())),
	}
}

/// Attempts to parse a named key such as `"del"`, `"insert"` or `"enter"`.
fn try_parse_named_key(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphabetic());
		if name.len() < 2 {
			return Ok(None);
		}

		Ok(name.parse::<Key>().ok())
	})
}

fn try_parse_char(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	match parser.peek() {
		Some(ch) if !ch.is_whitespace() => {
			parser.next();
			Ok(Some(Key::Char(ch)))
		}
		_ => Ok(None),
	}
}

/// Parses a whitespace-separated sequence of chords.
///
/// # Errors
///
/// Returns a [`ParseError`] if any segment fails to parse or the input holds no chords.
/// Positions are reported relative to the whole input.
pub fn parse_seq(s: &str) -> Result<Vec<Chord>, ParseError> {
	let mut chords = Vec::new();
	let mut offset = 0;

	for part in s.split_whitespace() {
		let start = offset + s[offset..].find(part).unwrap_or(0);
		offset = start + part.len();

		let chord = parse(part).map_err(|err| ParseError {
			position: start + err.position,
			..err
		})?;
		chords.push(chord);
	}

	if chords.is_empty() {
		return Err(ParseError {
			message: "empty key sequence".to_string(),
			position: 0,
		});
	}

	Ok(chords)
}

impl FromStr for Chord {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}
