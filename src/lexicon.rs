//! # Lexicon
//!
//! The lexicon partitions a word list into the two word lengths that the board
//! can hold, and remembers every prefix of every such word. Word sets drive
//! candidate enumeration in the solver; prefix trees drive pruning of
//! partially formed columns.

use std::collections::{BTreeMap, BTreeSet};

use fixedstr::str8;
use log::{debug, trace};
use pfx::PrefixTreeSet;

use crate::board::SIZE;

////////////////////////////////////////////////////////////////////////////////
//                                  Lexicon.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The word lengths that appear on a board: `SIZE - 1` for the truncated row
/// and column, `SIZE` for everything else.
pub const LENGTHS: [usize; 2] = [SIZE - 1, SIZE];

/// The words and prefixes of a dictionary, keyed by word length. Built once and
/// shared read-only by every generation attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Lexicon
{
	/// The words of each length. Ordered, so that enumeration (and therefore
	/// generation) is reproducible.
	words: BTreeMap<usize, BTreeSet<str8>>,

	/// The prefix tree of each length. Every prefix of every word of a given
	/// length, including the word itself, is answered by the tree for that
	/// length.
	prefixes: BTreeMap<usize, PrefixTreeSet<String>>
}

impl Lexicon
{
	/// Build a lexicon from raw dictionary entries. Each entry is trimmed and
	/// uppercased; entries whose length is not one of [`LENGTHS`], or which
	/// contain anything other than letters, are skipped silently.
	///
	/// # Arguments
	///
	/// * `words` - The raw dictionary entries.
	///
	/// # Returns
	///
	/// The lexicon.
	pub fn new<T: AsRef<str>>(words: &[T]) -> Self
	{
		let mut lexicon = Self
		{
			words: LENGTHS.iter()
				.map(|&length| (length, BTreeSet::new()))
				.collect(),
			prefixes: LENGTHS.iter()
				.map(|&length| (length, PrefixTreeSet::default()))
				.collect()
		};
		for word in words
		{
			lexicon.insert(word.as_ref());
		}
		debug!(
			"indexed lexicon: {} words of length {}, {} words of length {}",
			lexicon.words(SIZE - 1).len(),
			SIZE - 1,
			lexicon.words(SIZE).len(),
			SIZE
		);
		lexicon
	}

	/// Insert a single raw entry, subject to the filtering rules of
	/// [`new`](Self::new).
	///
	/// # Arguments
	///
	/// * `raw` - The raw dictionary entry.
	fn insert(&mut self, raw: &str)
	{
		let word = raw.trim().to_uppercase();
		let length = word.chars().count();
		if !LENGTHS.contains(&length)
			|| !word.chars().all(|c| c.is_ascii_alphabetic())
		{
			trace!("skipping entry: {:?}", raw);
			return
		}
		if let Some(words) = self.words.get_mut(&length)
		{
			words.insert(str8::from(word.as_str()));
		}
		if let Some(prefixes) = self.prefixes.get_mut(&length)
		{
			prefixes.insert(word);
		}
	}

	/// Check if the lexicon has no words of any board length.
	///
	/// # Returns
	///
	/// `true` if the lexicon is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.words.values().all(BTreeSet::is_empty)
	}

	/// Count the words of every board length.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.words.values().map(BTreeSet::len).sum()
	}

	/// Get the words of the given length, in lexicographic order. Lengths that
	/// the board never uses have no words.
	///
	/// # Arguments
	///
	/// * `length` - The word length.
	///
	/// # Returns
	///
	/// An iterator over the words of the given length.
	pub fn words(&self, length: usize) -> impl ExactSizeIterator<Item = &str8>
	{
		static EMPTY: BTreeSet<str8> = BTreeSet::new();
		self.words.get(&length).unwrap_or(&EMPTY).iter()
	}

	/// Check if the lexicon contains the given word among words of the given
	/// length.
	///
	/// # Arguments
	///
	/// * `length` - The word length.
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the word is present, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, length: usize, word: &str) -> bool
	{
		word.len() == length
			&& self.words.get(&length)
				.is_some_and(|words| words.contains(&str8::from(word)))
	}

	/// Check if the given string is a prefix (of length 1 through `length`) of
	/// some word of the given length. A complete word counts as its own prefix.
	///
	/// # Arguments
	///
	/// * `length` - The word length.
	/// * `prefix` - The prefix to check.
	///
	/// # Returns
	///
	/// `true` if the prefix leads to at least one word, `false` otherwise.
	#[must_use]
	pub fn contains_prefix(&self, length: usize, prefix: &str) -> bool
	{
		if prefix.is_empty() || prefix.len() > length
		{
			return false
		}
		self.prefixes.get(&length)
			.is_some_and(|tree| tree.contains(prefix) || tree.contains_prefix(prefix))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
