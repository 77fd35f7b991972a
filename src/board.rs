//! # Board
//!
//! Herein is the board: a square grid whose bottom-right corner is never
//! populated. Every row except the last holds a word of [`SIZE`] letters, the
//! last row holds a word of `SIZE - 1` letters, and likewise for the columns.
//! The shape rule lives in [`effective_length`] and [`effective_rows`] and
//! nowhere else.
//!
//! The board also knows how to render itself as a _board string_, the flat
//! representation handed to puzzle consumers: the populated cells in row-major
//! order, followed by a single [`TERMINATOR`] in place of the missing corner.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

use fixedstr::str8;

////////////////////////////////////////////////////////////////////////////////
//                                   Shape.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The side length of the board.
pub const SIZE: usize = 4;

/// The character that stands in for the missing corner cell in a board string.
pub const TERMINATOR: char = '*';

/// The length of a board string: every populated cell plus the terminator.
pub const BOARD_STRING_LEN: usize = SIZE * SIZE;

/// Get the number of letters in the given row.
///
/// # Arguments
///
/// * `row` - The row index.
///
/// # Returns
///
/// `SIZE - 1` for the last row, `SIZE` otherwise.
#[inline]
#[must_use]
pub const fn effective_length(row: usize) -> usize
{
	if row == SIZE - 1 { SIZE - 1 } else { SIZE }
}

/// Get the number of letters in the given column.
///
/// # Arguments
///
/// * `column` - The column index.
///
/// # Returns
///
/// `SIZE - 1` for the last column, `SIZE` otherwise.
#[inline]
#[must_use]
pub const fn effective_rows(column: usize) -> usize
{
	if column == SIZE - 1 { SIZE - 1 } else { SIZE }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Board.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The grid of a single generation attempt. Row 0 holds the top word from
/// construction onward; the other rows are placed and cleared by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Board
{
	/// The cells, row-major. `None` marks a blank cell.
	cells: [[Option<char>; SIZE]; SIZE]
}

impl Board
{
	/// Construct a board with the given top word in row 0 and every other cell
	/// blank.
	///
	/// # Arguments
	///
	/// * `top` - The top word.
	///
	/// # Returns
	///
	/// The new board.
	///
	/// # Panics
	///
	/// If the top word does not have exactly [`SIZE`] letters.
	pub fn new(top: &str8) -> Self
	{
		let mut board = Self { cells: [[None; SIZE]; SIZE] };
		board.place(0, top);
		board
	}

	/// Write a word into the given row, replacing whatever was there. Only the
	/// cells of that row are touched.
	///
	/// # Arguments
	///
	/// * `row` - The row index.
	/// * `word` - The word to write.
	///
	/// # Panics
	///
	/// If the word's length is not the [effective length](effective_length)
	/// of the row.
	pub fn place(&mut self, row: usize, word: &str8)
	{
		assert_eq!(
			word.len(),
			effective_length(row),
			"word {} does not fit row {}",
			word,
			row
		);
		self.clear(row);
		for (cell, c) in self.cells[row].iter_mut().zip(word.as_str().chars())
		{
			*cell = Some(c);
		}
	}

	/// Blank every cell of the given row.
	///
	/// # Arguments
	///
	/// * `row` - The row index.
	#[inline]
	pub fn clear(&mut self, row: usize)
	{
		self.cells[row] = [None; SIZE];
	}

	/// Get the content of the given cell.
	///
	/// # Arguments
	///
	/// * `row` - The row index.
	/// * `column` - The column index.
	///
	/// # Returns
	///
	/// The letter in the cell, or `None` if the cell is blank.
	#[inline]
	#[must_use]
	pub fn cell(&self, row: usize, column: usize) -> Option<char>
	{
		self.cells[row][column]
	}

	/// Get the word in the given row. Blank cells are skipped, so a cleared
	/// row yields the empty string.
	#[must_use]
	pub fn row(&self, row: usize) -> str8
	{
		let mut word = str8::new();
		for c in self.cells[row].iter().flatten()
		{
			word.push_char(*c);
		}
		word
	}

	/// Get the word formed by the first `rows` cells of the given column, read
	/// top to bottom. Reading stops at the first blank cell.
	///
	/// # Arguments
	///
	/// * `column` - The column index.
	/// * `rows` - The number of rows to read.
	///
	/// # Returns
	///
	/// The (possibly partial) column word.
	#[must_use]
	pub fn column(&self, column: usize, rows: usize) -> str8
	{
		let mut word = str8::new();
		for c in self.cells.iter()
			.take(rows)
			.map_while(|row| row[column])
		{
			word.push_char(c);
		}
		word
	}

	/// Check if every cell except the corner is populated, and the corner is
	/// blank.
	#[must_use]
	pub fn is_complete(&self) -> bool
	{
		(0 .. SIZE).all(|row| {
			(0 .. SIZE).all(|column| {
				let is_corner = column >= effective_length(row);
				self.cells[row][column].is_some() != is_corner
			})
		})
	}

	/// Serialize the board into a board string: the populated cells in
	/// row-major order, followed by one [`TERMINATOR`] for the missing corner.
	///
	/// # Returns
	///
	/// The board string, which has [`BOARD_STRING_LEN`] characters.
	#[must_use]
	pub fn to_board_string(&self) -> String
	{
		let mut s = String::with_capacity(BOARD_STRING_LEN);
		for row in 0 .. SIZE
		{
			s.push_str(self.row(row).as_str());
		}
		s.push(TERMINATOR);
		s
	}

	/// Parse a board string produced by [`to_board_string`](Self::to_board_string).
	///
	/// # Arguments
	///
	/// * `s` - The board string.
	///
	/// # Returns
	///
	/// The board.
	///
	/// # Errors
	///
	/// * [`BoardParseError::Length`] if the string has the wrong length.
	/// * [`BoardParseError::Terminator`] if the string does not end with a
	///   single [`TERMINATOR`].
	/// * [`BoardParseError::Letter`] if any other character is not an
	///   uppercase ASCII letter.
	pub fn parse(s: &str) -> Result<Self, BoardParseError>
	{
		let chars = s.chars().collect::<Vec<_>>();
		if chars.len() != BOARD_STRING_LEN
		{
			return Err(BoardParseError::Length(chars.len()))
		}
		let (letters, terminator) = chars.split_at(BOARD_STRING_LEN - 1);
		if terminator != [TERMINATOR]
		{
			return Err(BoardParseError::Terminator)
		}
		if let Some(&c) = letters.iter().find(|c| !c.is_ascii_uppercase())
		{
			return Err(BoardParseError::Letter(c))
		}
		let mut board = Self { cells: [[None; SIZE]; SIZE] };
		let mut letters = letters.iter();
		for row in 0 .. SIZE
		{
			for column in 0 .. effective_length(row)
			{
				board.cells[row][column] = letters.next().copied();
			}
		}
		Ok(board)
	}
}

impl Display for Board
{
	/// Print one row per line, with a blank in place of each empty cell.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for (index, row) in self.cells.iter().enumerate()
		{
			if index > 0
			{
				writeln!(f)?;
			}
			for cell in row
			{
				write!(f, "{}", cell.unwrap_or(' '))?;
			}
		}
		Ok(())
	}
}

/// The complete enumeration of board string parse errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardParseError
{
	/// The board string has the wrong number of characters.
	Length(usize),

	/// The board string does not end with exactly one terminator.
	Terminator,

	/// The board string contains something other than an uppercase letter.
	Letter(char)
}

impl Display for BoardParseError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Length(len) => write!(
				f,
				"board string has {} characters, expected {}",
				len,
				BOARD_STRING_LEN
			),
			Self::Terminator => write!(
				f,
				"board string must end with a single '{}'",
				TERMINATOR
			),
			Self::Letter(c) => write!(f, "unexpected character: {:?}", c)
		}
	}
}

impl Error for BoardParseError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use fixedstr::str8;

	use crate::board::{
		effective_length, effective_rows, Board, BoardParseError, SIZE
	};

	/// Build the board from the sample puzzle.
	fn sample() -> Board
	{
		let mut board = Board::new(&str8::from("PILE"));
		board.place(1, &str8::from("AREA"));
		board.place(2, &str8::from("COAT"));
		board.place(3, &str8::from("END"));
		board
	}

	/// Ensure that only the last row and column are truncated.
	#[test]
	fn test_shape()
	{
		for index in 0 .. SIZE - 1
		{
			assert_eq!(effective_length(index), SIZE);
			assert_eq!(effective_rows(index), SIZE);
		}
		assert_eq!(effective_length(SIZE - 1), SIZE - 1);
		assert_eq!(effective_rows(SIZE - 1), SIZE - 1);
	}

	/// Ensure that placing and clearing rows touches only the target row, and
	/// that a short word leaves no residue of a longer one.
	#[test]
	fn test_place_and_clear()
	{
		let mut board = Board::new(&str8::from("PILE"));
		assert_eq!(board.row(0), str8::from("PILE"));
		assert_eq!(board.row(1), str8::new());
		assert!(!board.is_complete());

		board.place(1, &str8::from("AREA"));
		board.place(1, &str8::from("COAT"));
		assert_eq!(board.row(1), str8::from("COAT"));
		assert_eq!(board.row(0), str8::from("PILE"));

		board.place(3, &str8::from("END"));
		assert_eq!(board.cell(3, 3), None);
		board.clear(1);
		assert_eq!(board.row(1), str8::new());
		assert_eq!(board.row(3), str8::from("END"));
		assert_eq!(board.column(0, SIZE), str8::from("P"));
	}

	/// Ensure that a word of the wrong length is refused.
	#[test]
	#[should_panic]
	fn test_place_wrong_length()
	{
		let mut board = Board::new(&str8::from("PILE"));
		board.place(3, &str8::from("AREA"));
	}

	/// Ensure that columns are read top to bottom, honoring the truncated
	/// last column.
	#[test]
	fn test_columns()
	{
		let board = sample();
		assert!(board.is_complete());
		assert_eq!(board.column(0, effective_rows(0)), str8::from("PACE"));
		assert_eq!(board.column(1, effective_rows(1)), str8::from("IRON"));
		assert_eq!(board.column(2, effective_rows(2)), str8::from("LEAD"));
		assert_eq!(board.column(3, effective_rows(3)), str8::from("EAT"));
		assert_eq!(board.column(2, 2), str8::from("LE"));
	}

	/// Ensure that the board string has the corner omitted and exactly one
	/// terminator, at the end.
	#[test]
	fn test_board_string()
	{
		let board = sample();
		let s = board.to_board_string();
		assert_eq!(s, "PILEAREACOATEND*");
		assert_eq!(s.matches('*').count(), 1);
		assert_eq!(Board::parse(&s), Ok(board.clone()));
		assert_eq!(board.to_string(), "PILE\nAREA\nCOAT\nEND ");
	}

	/// Ensure that malformed board strings are rejected.
	#[test]
	fn test_parse_errors()
	{
		assert_eq!(Board::parse("PILE*"), Err(BoardParseError::Length(5)));
		assert_eq!(
			Board::parse("PILEAREACOATENDX"),
			Err(BoardParseError::Terminator)
		);
		assert_eq!(
			Board::parse("PILEAREAcOATEND*"),
			Err(BoardParseError::Letter('c'))
		);
	}
}
