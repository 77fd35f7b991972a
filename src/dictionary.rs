//! # Dictionary
//!
//! Herein is support for loading the raw word list. Dictionaries are CSV files
//! with a header line; the first field of every subsequent record is a word.
//! Only the word list leaves this module: partitioning by length and prefix
//! indexing happen in the [`Lexicon`](crate::lexicon::Lexicon).

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a list of uppercase words, in source order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(Vec<String>);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Count the words in the dictionary.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Get the words of the dictionary.
	#[inline]
	#[must_use]
	pub fn words(&self) -> &[String] { &self.0 }

	/// Populate the dictionary with the given words. Each word is uppercased;
	/// empty words are dropped.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		self.0.extend(
			words.iter()
				.map(|word| word.as_ref().to_uppercase())
				.filter(|word| !word.is_empty())
		);
	}

	/// Construct a dictionary from CSV text. The first line is a header and
	/// is skipped; the first field of each remaining line is taken as a word.
	///
	/// # Arguments
	///
	/// * `lines` - The lines of the CSV text.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the text.
	pub fn parse<T: AsRef<str>>(lines: &[T]) -> Self
	{
		let words = lines.iter()
			.skip(1)
			.filter_map(|line| line.as_ref().split(',').next())
			.collect::<Vec<_>>();
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		dictionary
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the CSV
	/// file (`<name>.csv`), it will be read; otherwise, the CSV file will be
	/// read and a binary dictionary will be created (to optimize future reads).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, or no words at all, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let csv_path = dir.as_ref().join(format!("{}.csv", name));
		// Use the binary dictionary only if it's newer than the CSV file. Any
		// failure to stat either file sends us back to the CSV.
		if dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				csv_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|csv_time| dict_time > csv_time)
			})
			.unwrap_or(false)
		{
			let dictionary = Self::deserialize_from_file(&dict_path)?;
			trace!("Read binary dictionary: {}", dict_path.display());
			Ok(dictionary)
		}
		else
		{
			let dictionary = Self::read_from_file(&csv_path)?;
			trace!("Read CSV dictionary: {}", csv_path.display());
			match dictionary.serialize_to_file(&dict_path)
			{
				Ok(_) =>
				{
					trace!("Wrote binary dictionary: {}", dict_path.display())
				},
				Err(e) => warn!(
					"Failed to write binary dictionary: {}: {}",
					dict_path.display(),
					e
				)
			}
			Ok(dictionary)
		}
	}

	/// Construct a dictionary from the contents of the given CSV file.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file holds no words, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
		Self::parse(&lines).non_empty()
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, or no words, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary: Self = bincode::deserialize(&content)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		dictionary.non_empty()
	}

	/// Serialize the dictionary to the given file. The dictionary is serialized
	/// in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or written, an error is returned.
	/// * If the dictionary cannot be encoded, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content = bincode::serialize(self)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		file.write_all(&content)?;
		Ok(())
	}

	/// Refuse an empty dictionary, which can never produce a board.
	fn non_empty(self) -> Result<Self, io::Error>
	{
		if self.is_empty()
		{
			Err(io::Error::new(ErrorKind::InvalidData, "dictionary has no words"))
		}
		else
		{
			Ok(self)
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
