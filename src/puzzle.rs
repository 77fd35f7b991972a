//! # Puzzle
//!
//! The playable form of a board string. The letters of a generated board are
//! laid into a grid of `SIZE × SIZE + 1` cells, four to a row: the populated
//! cells of the board, then two blanks, one for the board's missing corner and
//! one spare. The player scrambles the cells and then slides letters into
//! neighbouring blanks until the grid spells the board again.

use rand::{seq::SliceRandom, Rng};

use crate::board::{Board, BoardParseError, SIZE, TERMINATOR};

/// The number of cells in a puzzle.
pub const CELLS: usize = SIZE * SIZE + 1;

/// The content of a blank cell.
pub const BLANK: char = ' ';

/// A sliding-tile puzzle built from a board string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Puzzle
{
	/// The cells in their solved arrangement.
	answer: [char; CELLS],

	/// The cells in their current arrangement.
	cells: [char; CELLS]
}

impl Puzzle
{
	/// Construct a solved puzzle from a board string.
	///
	/// # Arguments
	///
	/// * `board_string` - The board string.
	///
	/// # Returns
	///
	/// The puzzle, in its solved arrangement.
	///
	/// # Errors
	///
	/// Any error from [`Board::parse`].
	pub fn new(board_string: &str) -> Result<Self, BoardParseError>
	{
		let board = Board::parse(board_string)?;
		let mut answer = [BLANK; CELLS];
		for (cell, c) in answer.iter_mut().zip(board.to_board_string().chars())
		{
			*cell = if c == TERMINATOR { BLANK } else { c };
		}
		Ok(Self { answer, cells: answer })
	}

	/// Shuffle every cell, blanks included.
	///
	/// # Arguments
	///
	/// * `rng` - The source of randomness.
	pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R)
	{
		self.cells.shuffle(rng);
	}

	/// Get the cells in their current arrangement.
	#[inline]
	#[must_use]
	pub fn cells(&self) -> &[char; CELLS]
	{
		&self.cells
	}

	/// Check if the given cell is blank.
	#[inline]
	#[must_use]
	pub fn is_blank(&self, index: usize) -> bool
	{
		self.cells.get(index) == Some(&BLANK)
	}

	/// Move the letter at `from` into the blank at `to`. Nothing happens unless
	/// `to` is blank and the cells are [adjacent](is_adjacent).
	///
	/// # Arguments
	///
	/// * `from` - The index of the cell to move.
	/// * `to` - The index of the blank to move into.
	///
	/// # Returns
	///
	/// `true` if the cells were swapped, `false` otherwise.
	pub fn slide(&mut self, from: usize, to: usize) -> bool
	{
		if from >= CELLS || !self.is_blank(to) || !is_adjacent(from, to)
		{
			return false
		}
		self.cells.swap(from, to);
		true
	}

	/// Check if the current arrangement spells the board. The two blanks are
	/// interchangeable.
	#[inline]
	#[must_use]
	pub fn is_solved(&self) -> bool
	{
		self.cells == self.answer
	}
}

/// Check if two cells share an edge in a grid that is [`SIZE`] cells wide.
///
/// # Arguments
///
/// * `a` - The index of the first cell.
/// * `b` - The index of the second cell.
///
/// # Returns
///
/// `true` if the cells are horizontal or vertical neighbours, `false`
/// otherwise.
#[must_use]
pub fn is_adjacent(a: usize, b: usize) -> bool
{
	let (row_a, column_a) = (a / SIZE, a % SIZE);
	let (row_b, column_b) = (b / SIZE, b % SIZE);
	(row_a.abs_diff(row_b) == 1 && column_a == column_b)
		|| (column_a.abs_diff(column_b) == 1 && row_a == row_b)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
