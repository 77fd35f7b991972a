//! # Constraint checker
//!
//! Column validation for a board under construction. The partial check runs
//! after every row placement and prunes any branch whose columns can no longer
//! grow into words; the full check runs once all rows are filled and demands
//! real, unused words.

use std::collections::HashSet;

use fixedstr::str8;
use log::trace;

use crate::{
	board::{effective_rows, Board, SIZE},
	lexicon::Lexicon
};

/// Check that, with rows `0 ..= row` populated, every column spells a prefix
/// of some word of that column's [effective length](effective_rows). Stops at
/// the first offending column.
///
/// # Arguments
///
/// * `board` - The board.
/// * `lexicon` - The lexicon.
/// * `row` - The index of the most recently placed row.
///
/// # Returns
///
/// `true` if every column is still viable, `false` otherwise.
#[must_use]
pub fn partial_check(board: &Board, lexicon: &Lexicon, row: usize) -> bool
{
	(0 .. SIZE).all(|column| {
		let length = effective_rows(column);
		let prefix = board.column(column, length.min(row + 1));
		let viable = lexicon.contains_prefix(length, prefix.as_str());
		if !viable
		{
			trace!("column {} is not a prefix: {}", column, prefix);
		}
		viable
	})
}

/// Check that every column of a filled board is a word of its
/// [effective length](effective_rows), that no column repeats a word already
/// on the board, and that no two columns are the same word.
///
/// # Arguments
///
/// * `board` - The board.
/// * `lexicon` - The lexicon.
/// * `used` - The words already committed as rows.
///
/// # Returns
///
/// The column words, left to right, if every column passes; `None` otherwise.
#[must_use]
pub fn full_check(
	board: &Board,
	lexicon: &Lexicon,
	used: &HashSet<str8>
) -> Option<Vec<str8>>
{
	let mut columns = Vec::with_capacity(SIZE);
	for column in 0 .. SIZE
	{
		let length = effective_rows(column);
		let word = board.column(column, length);
		if !lexicon.contains(length, word.as_str())
		{
			trace!("column {} is not a word: {}", column, word);
			return None
		}
		if used.contains(&word) || columns.contains(&word)
		{
			trace!("column {} repeats a word: {}", column, word);
			return None
		}
		columns.push(word);
	}
	Some(columns)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::collections::HashSet;

	use fixedstr::str8;

	use crate::{
		board::Board,
		checker::{full_check, partial_check},
		lexicon::Lexicon
	};

	fn lexicon() -> Lexicon
	{
		Lexicon::new(&[
			"PILE", "AREA", "COAT", "END", "PACE", "IRON", "LEAD", "EAT"
		])
	}

	fn used(words: &[&str]) -> HashSet<str8>
	{
		words.iter().map(|&w| str8::from(w)).collect()
	}

	/// Ensure that the partial check accepts viable prefixes at every depth
	/// and rejects the first dead column.
	#[test]
	fn test_partial_check()
	{
		let lexicon = lexicon();
		let mut board = Board::new(&str8::from("PILE"));
		assert!(partial_check(&board, &lexicon, 0));

		board.place(1, &str8::from("AREA"));
		assert!(partial_check(&board, &lexicon, 1));
		board.place(2, &str8::from("COAT"));
		assert!(partial_check(&board, &lexicon, 2));
		board.place(3, &str8::from("END"));
		assert!(partial_check(&board, &lexicon, 3));

		// "PL" starts no four-letter word.
		board.place(1, &str8::from("LEAD"));
		assert!(!partial_check(&board, &lexicon, 1));
	}

	/// Ensure that the last column is judged against three-letter words even
	/// though the top three rows are four letters wide.
	#[test]
	fn test_partial_check_truncated_column()
	{
		let words = ["ABCD", "EFGH", "AEXX", "BFXX", "CGXX"];
		let mut board = Board::new(&str8::from("ABCD"));
		board.place(1, &str8::from("EFGH"));

		let mut long = words.to_vec();
		long.push("DHXY");
		assert!(!partial_check(&board, &Lexicon::new(long.as_slice()), 1));

		let mut short = words.to_vec();
		short.push("DHX");
		assert!(partial_check(&board, &Lexicon::new(short.as_slice()), 1));
	}

	/// Ensure that the full check requires complete, unused, distinct column
	/// words.
	#[test]
	fn test_full_check()
	{
		let lexicon = lexicon();
		let mut board = Board::new(&str8::from("PILE"));
		board.place(1, &str8::from("AREA"));
		board.place(2, &str8::from("COAT"));
		board.place(3, &str8::from("END"));
		let rows = used(&["PILE", "AREA", "COAT", "END"]);
		assert_eq!(
			full_check(&board, &lexicon, &rows),
			Some(vec![
				str8::from("PACE"),
				str8::from("IRON"),
				str8::from("LEAD"),
				str8::from("EAT")
			])
		);

		// A column that repeats a row is refused.
		let rows = used(&["PILE", "AREA", "COAT", "END", "LEAD"]);
		assert_eq!(full_check(&board, &lexicon, &rows), None);

		// A column that is no word of its length is refused.
		let lexicon = Lexicon::new(&[
			"PILE", "AREA", "COAT", "END", "PACES", "IRON", "LEAD", "EAT", "PACK"
		]);
		assert_eq!(full_check(&board, &lexicon, &used(&["PILE"])), None);
	}

	/// Ensure that two identical columns are refused.
	#[test]
	fn test_full_check_duplicate_columns()
	{
		let lexicon = Lexicon::new(&["AAAB", "AAAB", "AAB", "ABA"]);
		let mut board = Board::new(&str8::from("AAAA"));
		board.place(1, &str8::from("AAAA"));
		board.place(2, &str8::from("AAAA"));
		board.place(3, &str8::from("BBB"));
		assert_eq!(full_check(&board, &lexicon, &HashSet::new()), None);
	}
}
