//! Trie-backed keymap.
//!
//! Nodes live in a flat `Vec` and refer to their children by index. Node 0 is the root
//! and never carries commands, since empty sequences cannot be bound.

use chordal_keymap_parser::{Chord, format_seq, parse_seq};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{Command, KeymapError};

#[cfg(test)]
mod tests;

type Commands = SmallVec<[Command; 2]>;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
	children: FxHashMap<Chord, usize>,
	commands: Commands,
}

/// Outcome of resolving a chord sequence against a [`Keymap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
	/// The sequence is bound and no longer binding starts with it.
	Complete(&'a [Command]),
	/// The sequence is a strict prefix of a longer binding.
	Partial {
		/// Whether the sequence is itself bound as well.
		has_value: bool,
	},
	/// Nothing is bound at or below the sequence.
	None,
}

/// A chord that extends a prefix toward at least one binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinuationEntry {
	pub chord: Chord,
	/// Whether prefix + chord is bound.
	pub has_value: bool,
}

/// One binding as listed by [`Keymap::bindings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<'a> {
	pub keys: Vec<Chord>,
	pub commands: &'a [Command],
}

/// A sequence that was bound more than once. The later binding wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapConflict {
	pub keys: Vec<Chord>,
	pub kept: Vec<Command>,
	pub dropped: Vec<Command>,
}

/// A binding that can never fire through suffix matching.
///
/// Typing the bound sequence always completes a shorter binding first, which clears the
/// pending input before the last chord arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedBinding {
	pub keys: Vec<Chord>,
	pub shadowed_by: Vec<Chord>,
}

/// Immutable mapping from chord sequences to command lists.
///
/// Lookup is exact: [`Keymap::lookup`] never matches prefixes or suffixes of a sequence.
#[derive(Debug, Clone)]
pub struct Keymap {
	nodes: Vec<TrieNode>,
	len: usize,
	conflicts: Vec<KeymapConflict>,
	shadowed: Vec<ShadowedBinding>,
}

impl Default for Keymap {
	fn default() -> Self {
		Self {
			nodes: vec![TrieNode::default()],
			len: 0,
			conflicts: Vec::new(),
			shadowed: Vec::new(),
		}
	}
}

impl Keymap {
	pub fn builder() -> KeymapBuilder {
		KeymapBuilder::default()
	}

	/// Builds a keymap from an explicit mapping.
	///
	/// # Errors
	///
	/// Fails on the first binding with no chords or no commands.
	pub fn from_bindings<I, K, C>(bindings: I) -> Result<Self, KeymapError>
	where
		I: IntoIterator<Item = (K, C)>,
		K: IntoIterator<Item = Chord>,
		C: IntoIterator<Item = Command>,
	{
		let mut builder = Self::builder();
		for (keys, commands) in bindings {
			builder.bind(keys, commands)?;
		}
		Ok(builder.build())
	}

	/// Returns the commands bound to exactly `keys`, or an empty slice.
	pub fn lookup(&self, keys: &[Chord]) -> &[Command] {
		self.node(keys).map(|node| node.commands.as_slice()).unwrap_or_default()
	}

	/// Classifies `keys` as bound, a pending prefix, or unknown.
	///
	/// The empty sequence resolves to [`MatchResult::None`].
	pub fn resolve(&self, keys: &[Chord]) -> MatchResult<'_> {
		if keys.is_empty() {
			return MatchResult::None;
		}

		match self.node(keys) {
			Some(node) if !node.children.is_empty() => MatchResult::Partial {
				has_value: !node.commands.is_empty(),
			},
			Some(node) if !node.commands.is_empty() => MatchResult::Complete(&node.commands),
			_ => MatchResult::None,
		}
	}

	/// Lists the chords that can follow `prefix`, sorted by their text form.
	pub fn continuations(&self, prefix: &[Chord]) -> Vec<ContinuationEntry> {
		let Some(node) = self.node(prefix) else {
			return Vec::new();
		};

		let mut entries: Vec<_> = node
			.children
			.iter()
			.map(|(&chord, &child)| ContinuationEntry {
				chord,
				has_value: !self.nodes[child].commands.is_empty(),
			})
			.collect();
		entries.sort_by_cached_key(|entry| entry.chord.to_string());
		entries
	}

	/// Every binding, sorted by the text form of its sequence.
	pub fn bindings(&self) -> Vec<Binding<'_>> {
		let mut out = Vec::with_capacity(self.len);
		let mut stack = vec![(ROOT, Vec::new())];

		while let Some((idx, keys)) = stack.pop() {
			let node = &self.nodes[idx];
			for (&chord, &child) in &node.children {
				let mut child_keys = keys.clone();
				child_keys.push(chord);
				stack.push((child, child_keys));
			}
			if !node.commands.is_empty() {
				out.push(Binding {
					keys,
					commands: &node.commands,
				});
			}
		}

		out.sort_by_cached_key(|binding| format_seq(&binding.keys));
		out
	}

	/// Number of bound sequences.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Duplicate bindings dropped while building.
	pub fn conflicts(&self) -> &[KeymapConflict] {
		&self.conflicts
	}

	/// Bindings that suffix matching can never reach.
	pub fn shadowed(&self) -> &[ShadowedBinding] {
		&self.shadowed
	}

	fn node(&self, keys: &[Chord]) -> Option<&TrieNode> {
		let mut idx = ROOT;
		for chord in keys {
			idx = *self.nodes[idx].children.get(chord)?;
		}
		Some(&self.nodes[idx])
	}

	/// Finds the earliest bound window that ends strictly before the last chord of `keys`.
	fn shadowing_window<'k>(&self, keys: &'k [Chord]) -> Option<&'k [Chord]> {
		(1..keys.len()).find_map(|end| {
			(0..end)
				.map(move |start| &keys[start..end])
				.find(|window| !self.lookup(window).is_empty())
		})
	}
}

/// Accumulates bindings and produces an immutable [`Keymap`].
#[derive(Debug, Default)]
pub struct KeymapBuilder {
	keymap: Keymap,
}

impl KeymapBuilder {
	/// Binds `keys` to `commands`, replacing any earlier binding of the same sequence.
	///
	/// # Errors
	///
	/// Returns [`KeymapError::EmptySequence`] or [`KeymapError::EmptyCommands`].
	pub fn bind(&mut self, keys: impl IntoIterator<Item = Chord>, commands: impl IntoIterator<Item = Command>) -> Result<(), KeymapError> {
		let keys: Vec<Chord> = keys.into_iter().collect();
		if keys.is_empty() {
			return Err(KeymapError::EmptySequence);
		}

		let commands: Commands = commands.into_iter().collect();
		if commands.is_empty() {
			return Err(KeymapError::EmptyCommands { keys: format_seq(&keys) });
		}

		self.insert(keys, commands);
		Ok(())
	}

	/// Parses `keys` (e.g. `"ctrl-k ctrl-c"`) and binds it.
	///
	/// # Errors
	///
	/// Returns [`KeymapError::Parse`] for malformed text, otherwise as [`Self::bind`].
	pub fn bind_str(&mut self, keys: &str, commands: impl IntoIterator<Item = Command>) -> Result<(), KeymapError> {
		if keys.trim().is_empty() {
			return Err(KeymapError::EmptySequence);
		}

		let chords = parse_seq(keys).map_err(|source| KeymapError::Parse {
			input: keys.to_string(),
			source,
		})?;
		self.bind(chords, commands)
	}

	/// Whether `keys` is already bound.
	pub fn contains(&self, keys: &[Chord]) -> bool {
		!self.keymap.lookup(keys).is_empty()
	}

	/// Binds `keys` only if it is not bound yet. Returns whether the binding was added.
	pub(crate) fn insert_if_absent(&mut self, keys: &[Chord], commands: &[Command]) -> bool {
		if keys.is_empty() || commands.is_empty() || self.contains(keys) {
			return false;
		}
		self.insert(keys.to_vec(), commands.iter().cloned().collect());
		true
	}

	fn insert(&mut self, keys: Vec<Chord>, commands: Commands) {
		let idx = self.path(&keys);
		let node = &mut self.keymap.nodes[idx];

		if node.commands.is_empty() {
			node.commands = commands;
			self.keymap.len += 1;
			return;
		}

		let dropped = std::mem::replace(&mut node.commands, commands);
		let kept = node.commands.to_vec();
		warn!(keys = %format_seq(&keys), ?kept, ?dropped, "duplicate keymap binding, keeping the later one");
		self.keymap.conflicts.push(KeymapConflict {
			keys,
			kept,
			dropped: dropped.into_vec(),
		});
	}

	/// Walks `keys` from the root, creating missing nodes, and returns the final node index.
	fn path(&mut self, keys: &[Chord]) -> usize {
		let mut idx = ROOT;
		for &chord in keys {
			if let Some(&child) = self.keymap.nodes[idx].children.get(&chord) {
				idx = child;
				continue;
			}

			let child = self.keymap.nodes.len();
			self.keymap.nodes.push(TrieNode::default());
			self.keymap.nodes[idx].children.insert(chord, child);
			idx = child;
		}
		idx
	}

	/// Finishes the keymap and records bindings that suffix matching cannot reach.
	pub fn build(self) -> Keymap {
		let mut keymap = self.keymap;

		let shadowed: Vec<ShadowedBinding> = keymap
			.bindings()
			.into_iter()
			.filter_map(|binding| {
				let window = keymap.shadowing_window(&binding.keys)?;
				Some(ShadowedBinding {
					shadowed_by: window.to_vec(),
					keys: binding.keys,
				})
			})
			.collect();

		for entry in &shadowed {
			warn!(
				keys = %format_seq(&entry.keys),
				shadowed_by = %format_seq(&entry.shadowed_by),
				"keymap binding is unreachable"
			);
		}
		keymap.shadowed = shadowed;

		debug!(
			bindings = keymap.len,
			conflicts = keymap.conflicts.len(),
			shadowed = keymap.shadowed.len(),
			"keymap built"
		);
		keymap
	}
}
