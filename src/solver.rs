//! # Solver
//!
//! Herein is the board generator. Given a top word, the solver fills the
//! remaining rows one at a time, depth first, trying every word of the right
//! length in lexicographic order. After each placement the
//! [partial check](crate::checker::partial_check) prunes branches whose
//! columns cannot become words; once every row is filled the
//! [full check](crate::checker::full_check) decides whether the board is a
//! solution.
//!
//! Each generation attempt owns its board and used-word set outright, so
//! attempts for different top words may run on the [`rayon`] thread pool,
//! sharing only the read-only [`Lexicon`], which is `Sync`.

use std::{
	collections::HashSet,
	error::Error,
	fmt::{self, Display, Formatter},
	time::{Duration, Instant}
};

use fixedstr::str8;
use log::{debug, trace};
use rayon::prelude::*;

use crate::{
	board::{effective_length, Board, SIZE},
	checker::{full_check, partial_check},
	lexicon::Lexicon
};

////////////////////////////////////////////////////////////////////////////////
//                                Generation.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Generate a board whose top row is the given word.
///
/// # Arguments
///
/// * `lexicon` - The lexicon to draw words from.
/// * `top` - The top word. Surrounding whitespace is ignored, and case is
///   normalized.
/// * `budget` - The limits on the search.
///
/// # Returns
///
/// The outcome of the search.
///
/// # Errors
///
/// * [`GenerateError::EmptyLexicon`] if the lexicon has no words.
/// * [`GenerateError::InvalidTopWord`] if the top word cannot head a board.
pub fn generate(
	lexicon: &Lexicon,
	top: &str,
	budget: Budget
) -> Result<Outcome, GenerateError>
{
	let solver = Solver::new(lexicon, top, budget)?;
	let (outcome, statistics) = solver.solve();
	debug!("generated {}: {} ({:?})", top, outcome, statistics);
	Ok(outcome)
}

/// Generate one board per top word, in parallel on the global [`rayon`] pool.
/// The attempts share nothing but the lexicon.
///
/// # Arguments
///
/// * `lexicon` - The lexicon to draw words from.
/// * `tops` - The top words.
/// * `budget` - The limits on each search.
///
/// # Returns
///
/// The result of each attempt, in the order of `tops`.
pub fn generate_all<T: AsRef<str> + Sync>(
	lexicon: &Lexicon,
	tops: &[T],
	budget: Budget
) -> Vec<Result<Outcome, GenerateError>>
{
	tops.par_iter()
		.map(|top| generate(lexicon, top.as_ref(), budget))
		.collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                  Budgets.                                  //
////////////////////////////////////////////////////////////////////////////////

/// Limits on a single search. An unlimited budget searches until a solution is
/// found or the search space is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Budget
{
	/// The maximum number of candidate words to consider.
	pub max_nodes: Option<u64>,

	/// The maximum wall-clock time to spend.
	pub max_duration: Option<Duration>
}

impl Budget
{
	/// A budget without limits.
	pub const UNLIMITED: Self = Self { max_nodes: None, max_duration: None };

	/// Limit the number of candidate words to consider.
	#[inline]
	pub fn with_max_nodes(mut self, max_nodes: u64) -> Self
	{
		self.max_nodes = Some(max_nodes);
		self
	}

	/// Limit the wall-clock time to spend.
	#[inline]
	pub fn with_max_duration(mut self, max_duration: Duration) -> Self
	{
		self.max_duration = Some(max_duration);
		self
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Outcomes.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Outcome
{
	/// The search produced a complete board.
	Solved(Board),

	/// The search space was exhausted. No board exists for the top word.
	NoSolution,

	/// The budget ran out before the search concluded. A board may or may not
	/// exist.
	BudgetExhausted
}

impl Outcome
{
	/// Check if the search produced a board.
	#[inline]
	#[must_use]
	pub fn is_solved(&self) -> bool
	{
		matches!(self, Self::Solved(_))
	}

	/// Get the board string of the solution, if any.
	///
	/// # Returns
	///
	/// The [board string](Board::to_board_string), or `None` if the search
	/// did not produce a board.
	#[must_use]
	pub fn board_string(&self) -> Option<String>
	{
		match self
		{
			Self::Solved(board) => Some(board.to_board_string()),
			_ => None
		}
	}
}

impl Display for Outcome
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Solved(board) => write!(f, "{}", board.to_board_string()),
			Self::NoSolution => write!(f, "NO SOLUTION"),
			Self::BudgetExhausted => write!(f, "BUDGET EXHAUSTED")
		}
	}
}

/// Counters describing the work done by a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics
{
	/// The number of candidate words considered, including those skipped
	/// because they were already on the board.
	pub candidates: u64,

	/// The number of words placed into each row. Row 0 is never placed by the
	/// search.
	pub placements: [u64; SIZE],

	/// The number of placements rejected by the partial check.
	pub pruned: u64,

	/// The number of rows whose candidates were exhausted.
	pub backtracks: u64
}

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete context of a single generation attempt.
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver<'a>
{
	/// The lexicon to draw words from.
	lexicon: &'a Lexicon,

	/// The board under construction.
	board: Board,

	/// The words committed to the board along the current search path.
	used: HashSet<str8>,

	/// The limits on the search.
	budget: Budget,

	/// When the search must stop, if ever. Set when the search starts.
	deadline: Option<Instant>,

	/// The work done so far.
	statistics: Statistics
}

/// The verdict of a search from some row downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Search
{
	/// The board is solved and must not be disturbed.
	Found,

	/// Every candidate failed. The rows from the starting row downward are
	/// blank again.
	Exhausted,

	/// The budget ran out. The rows from the starting row downward are blank
	/// again.
	OutOfBudget
}

impl<'a> Solver<'a>
{
	/// Construct a solver for the given top word.
	///
	/// # Arguments
	///
	/// * `lexicon` - The lexicon to draw words from.
	/// * `top` - The top word. Surrounding whitespace is ignored, and case is
	///   normalized.
	/// * `budget` - The limits on the search.
	///
	/// # Returns
	///
	/// A solver whose board holds only the top word.
	///
	/// # Errors
	///
	/// * [`GenerateError::EmptyLexicon`] if the lexicon has no words.
	/// * [`GenerateError::InvalidTopWord`] if the top word has the wrong
	///   length, contains anything but letters, or is not in the lexicon.
	pub fn new(
		lexicon: &'a Lexicon,
		top: &str,
		budget: Budget
	) -> Result<Self, GenerateError>
	{
		if lexicon.is_empty()
		{
			return Err(GenerateError::EmptyLexicon)
		}
		let word = top.trim().to_uppercase();
		let invalid = |problem| GenerateError::InvalidTopWord {
			word: word.clone(),
			problem
		};
		if !word.chars().all(|c| c.is_ascii_alphabetic())
		{
			return Err(invalid(TopWordProblem::NotAlphabetic))
		}
		if word.len() != SIZE
		{
			return Err(invalid(TopWordProblem::Length(word.len())))
		}
		if !lexicon.contains(SIZE, &word)
		{
			return Err(invalid(TopWordProblem::Unknown))
		}
		let top = str8::from(word.as_str());
		let mut used = HashSet::new();
		used.insert(top);
		Ok(Self {
			lexicon,
			board: Board::new(&top),
			used,
			budget,
			deadline: None,
			statistics: Statistics::default()
		})
	}

	/// Run the search to completion, or until the budget runs out.
	///
	/// # Returns
	///
	/// A 2-tuple comprising the outcome and the work done, respectively.
	pub fn solve(mut self) -> (Outcome, Statistics)
	{
		self.deadline = self.budget.max_duration
			.map(|duration| Instant::now() + duration);
		let outcome = match self.search(1)
		{
			Search::Found =>
			{
				debug!("solved:\n{}", self.board);
				Outcome::Solved(self.board)
			},
			Search::Exhausted =>
			{
				debug!("exhausted search space");
				Outcome::NoSolution
			},
			Search::OutOfBudget =>
			{
				debug!("budget exhausted: {:?}", self.budget);
				Outcome::BudgetExhausted
			}
		};
		(outcome, self.statistics)
	}

	/// Search for a solution from the given row downward. On entry, rows
	/// `0 .. row` are populated. On [`Search::Found`], every row is populated;
	/// otherwise rows `row ..` are blank and the used-word set is as it was on
	/// entry.
	///
	/// # Arguments
	///
	/// * `row` - The row to fill.
	///
	/// # Returns
	///
	/// The verdict.
	fn search(&mut self, row: usize) -> Search
	{
		if row == SIZE
		{
			return match full_check(&self.board, self.lexicon, &self.used)
			{
				Some(columns) =>
				{
					self.used.extend(columns);
					Search::Found
				},
				None => Search::Exhausted
			}
		}
		let lexicon = self.lexicon;
		for word in lexicon.words(effective_length(row))
		{
			if self.is_out_of_budget()
			{
				self.board.clear(row);
				return Search::OutOfBudget
			}
			self.statistics.candidates += 1;
			if self.used.contains(word)
			{
				continue
			}
			trace!("row {}: trying {}", row, word);
			self.board.place(row, word);
			self.used.insert(*word);
			self.statistics.placements[row] += 1;
			if partial_check(&self.board, lexicon, row)
			{
				match self.search(row + 1)
				{
					Search::Found => return Search::Found,
					Search::OutOfBudget =>
					{
						self.used.remove(word);
						self.board.clear(row);
						return Search::OutOfBudget
					},
					Search::Exhausted => {}
				}
			}
			else
			{
				self.statistics.pruned += 1;
			}
			self.used.remove(word);
			self.board.clear(row);
		}
		self.statistics.backtracks += 1;
		self.board.clear(row);
		Search::Exhausted
	}

	/// Check if the budget has run out.
	fn is_out_of_budget(&self) -> bool
	{
		self.budget.max_nodes
			.is_some_and(|max| self.statistics.candidates >= max)
			|| self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of generation errors. Failing to find a board is
/// not an error; see [`Outcome`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError
{
	/// The lexicon has no words of either board length, so the dictionary is
	/// unusable.
	EmptyLexicon,

	/// The top word cannot head a board.
	InvalidTopWord {
		/// The normalized top word.
		word: String,

		/// What is wrong with it.
		problem: TopWordProblem
	}
}

/// The reasons that a top word may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopWordProblem
{
	/// The word has the given length rather than [`SIZE`].
	Length(usize),

	/// The word contains something other than ASCII letters.
	NotAlphabetic,

	/// The word is not in the lexicon.
	Unknown
}

impl Display for GenerateError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::EmptyLexicon => write!(f, "dictionary has no usable words"),
			Self::InvalidTopWord { word, problem } =>
				write!(f, "invalid top word {:?}: {}", word, problem)
		}
	}
}

impl Display for TopWordProblem
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Length(len) =>
				write!(f, "has {} letters, expected {}", len, SIZE),
			Self::NotAlphabetic => write!(f, "contains non-letters"),
			Self::Unknown => write!(f, "not in the dictionary")
		}
	}
}

impl Error for GenerateError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{collections::HashSet, time::Duration};

	use fixedstr::str8;

	use crate::{
		board::{effective_length, effective_rows, SIZE, TERMINATOR},
		dictionary::Dictionary,
		lexicon::Lexicon,
		solver::{
			generate, generate_all, Budget, GenerateError, Outcome, Search,
			Solver, TopWordProblem
		}
	};

	/// The words of the sample puzzle, whose only solution for "PILE" is
	/// PILE/AREA/COAT/END.
	fn sample() -> Lexicon
	{
		Lexicon::new(&[
			"pile", "area", "coat", "end", "pace", "iron", "lead", "eat"
		])
	}

	/// Assert every property of a completed board.
	fn assert_valid(lexicon: &Lexicon, top: &str, outcome: &Outcome)
	{
		let Outcome::Solved(board) = outcome
		else
		{
			panic!("not solved: {}", outcome)
		};
		assert!(board.is_complete());
		assert_eq!(board.row(0), str8::from(top));
		let mut seen = HashSet::new();
		for row in 0 .. SIZE
		{
			let word = board.row(row);
			assert!(
				lexicon.contains(effective_length(row), word.as_str()),
				"row {}: {}",
				row,
				word
			);
			assert!(seen.insert(word), "repeated: {}", word);
		}
		for column in 0 .. SIZE
		{
			let length = effective_rows(column);
			let word = board.column(column, length);
			assert!(
				lexicon.contains(length, word.as_str()),
				"column {}: {}",
				column,
				word
			);
			assert!(seen.insert(word), "repeated: {}", word);
		}
		assert_eq!(board.cell(SIZE - 1, SIZE - 1), None);
		let s = board.to_board_string();
		assert_eq!(s.chars().count(), SIZE * SIZE);
		assert_eq!(s.matches(TERMINATOR).count(), 1);
		assert!(s.ends_with(TERMINATOR));
	}

	/// Ensure that the sample puzzle is reproduced exactly.
	#[test]
	fn test_sample()
	{
		let lexicon = sample();
		let outcome = generate(&lexicon, "PILE", Budget::UNLIMITED).unwrap();
		assert_valid(&lexicon, "PILE", &outcome);
		assert_eq!(outcome.board_string().unwrap(), "PILEAREACOATEND*");

		// Case and whitespace are normalized.
		assert_eq!(
			generate(&lexicon, " pile\n", Budget::UNLIMITED).unwrap(),
			outcome
		);
	}

	/// Ensure that generation is reproducible.
	#[test]
	fn test_idempotent()
	{
		let dictionary = Dictionary::read_from_file("dict/english.csv").unwrap();
		let lexicon = Lexicon::new(dictionary.words());
		for top in ["PILE", "CART", "STOP"]
		{
			let first = generate(&lexicon, top, Budget::UNLIMITED).unwrap();
			let second = generate(&lexicon, top, Budget::UNLIMITED).unwrap();
			assert_eq!(first, second, "{}", top);
		}
	}

	/// Ensure that every board found with the bundled dictionary satisfies all
	/// row and column constraints.
	#[test]
	fn test_bundled_dictionary()
	{
		let dictionary = Dictionary::read_from_file("dict/english.csv").unwrap();
		let lexicon = Lexicon::new(dictionary.words());
		let tops = ["PILE", "CART", "STOP", "HEAT", "MILE", "ROSE"];
		let mut solved = 0;
		for top in tops
		{
			let outcome = generate(&lexicon, top, Budget::UNLIMITED).unwrap();
			if outcome.is_solved()
			{
				assert_valid(&lexicon, top, &outcome);
				solved += 1;
			}
		}
		assert!(solved > 0);
	}

	/// Ensure that a dictionary too small to complete the board yields no
	/// solution rather than a partial board.
	#[test]
	fn test_no_solution()
	{
		let lexicon = Lexicon::new(&["CART", "CARE", "TREE", "AREA", "RENT", "TEAR"]);
		assert_eq!(
			generate(&lexicon, "CART", Budget::UNLIMITED),
			Ok(Outcome::NoSolution)
		);

		// Three-letter words exist, but none completes the board.
		let lexicon = Lexicon::new(&["PILE", "AREA", "COAT", "PACE", "IRON", "LEAD", "EAT"]);
		let (outcome, statistics) = Solver::new(&lexicon, "PILE", Budget::UNLIMITED)
			.unwrap()
			.solve();
		assert_eq!(outcome, Outcome::NoSolution);
		assert!(statistics.backtracks > 0);
	}

	/// Ensure that a column which repeats a row word is refused, even when
	/// the board is otherwise complete.
	#[test]
	fn test_no_repeated_words()
	{
		// Every completion of ABBA repeats ABBA in the first column.
		let lexicon = Lexicon::new(&["ABBA", "BOOB", "BOOM", "ABM"]);
		assert_eq!(
			generate(&lexicon, "ABBA", Budget::UNLIMITED),
			Ok(Outcome::NoSolution)
		);
	}

	/// Ensure that bad input is refused before any search.
	#[test]
	fn test_invalid_input()
	{
		let lexicon = sample();
		assert_eq!(
			generate(&lexicon, "PIL", Budget::UNLIMITED),
			Err(GenerateError::InvalidTopWord {
				word: "PIL".to_string(),
				problem: TopWordProblem::Length(3)
			})
		);
		assert_eq!(
			generate(&lexicon, "PI1E", Budget::UNLIMITED),
			Err(GenerateError::InvalidTopWord {
				word: "PI1E".to_string(),
				problem: TopWordProblem::NotAlphabetic
			})
		);
		assert_eq!(
			generate(&lexicon, "MILE", Budget::UNLIMITED),
			Err(GenerateError::InvalidTopWord {
				word: "MILE".to_string(),
				problem: TopWordProblem::Unknown
			})
		);
		assert_eq!(
			generate(&Lexicon::new(&["PILES"]), "PILE", Budget::UNLIMITED),
			Err(GenerateError::EmptyLexicon)
		);
	}

	/// Ensure that an exhausted budget is reported distinctly from the
	/// absence of a solution.
	#[test]
	fn test_budget()
	{
		let lexicon = sample();
		let (outcome, statistics) =
			Solver::new(&lexicon, "PILE", Budget::UNLIMITED.with_max_nodes(1))
				.unwrap()
				.solve();
		assert_eq!(outcome, Outcome::BudgetExhausted);
		assert_eq!(statistics.candidates, 1);

		let budget = Budget::UNLIMITED.with_max_duration(Duration::ZERO);
		assert_eq!(
			generate(&lexicon, "PILE", budget),
			Ok(Outcome::BudgetExhausted)
		);

		let budget = Budget::UNLIMITED.with_max_nodes(1_000);
		assert!(generate(&lexicon, "PILE", budget).unwrap().is_solved());
	}

	/// Ensure that a row 1 candidate rejected by the partial check never leads
	/// to placements in deeper rows, and that the search does strictly less
	/// work than enumerating every combination of rows.
	#[test]
	fn test_pruning()
	{
		let lexicon = Lexicon::new(&["PILE", "AREA", "COAT", "IRON", "EAT"]);
		let (outcome, statistics) = Solver::new(&lexicon, "PILE", Budget::UNLIMITED)
			.unwrap()
			.solve();
		assert_eq!(outcome, Outcome::NoSolution);
		assert_eq!(statistics.placements, [0, 3, 0, 0]);
		assert_eq!(statistics.pruned, 3);
		let brute_force = 3 * 3 * 1;
		assert!(statistics.candidates < brute_force);
	}

	/// Ensure that a failed search leaves the board and used-word set exactly
	/// as it found them.
	#[test]
	fn test_backtracking_restores_state()
	{
		let lexicon = Lexicon::new(&["PILE", "AREA", "COAT", "PACE", "IRON", "LEAD", "EAT"]);
		let mut solver = Solver::new(&lexicon, "PILE", Budget::UNLIMITED).unwrap();
		let board = solver.board.clone();
		let used = solver.used.clone();
		assert_eq!(solver.search(1), Search::Exhausted);
		assert_eq!(solver.board, board);
		assert_eq!(solver.used, used);
	}

	/// Ensure that independent attempts run side by side and report in input
	/// order.
	#[test]
	fn test_generate_all()
	{
		let lexicon = sample();
		let results = generate_all(&lexicon, &["PILE", "XXXX", "PILE"], Budget::UNLIMITED);
		assert_eq!(results.len(), 3);
		assert_eq!(
			results[0].as_ref().unwrap().board_string().unwrap(),
			"PILEAREACOATEND*"
		);
		assert!(matches!(
			results[1],
			Err(GenerateError::InvalidTopWord { problem: TopWordProblem::Unknown, .. })
		));
		assert_eq!(results[0], results[2]);
	}

	/// Test that a long list of top words runs on a small, fixed pool and
	/// still yields one result per word, in input order.
	#[test]
	fn test_generate_all_bounded_pool()
	{
		let lexicon = sample();
		let tops = (0..200)
			.map(|i| if i % 2 == 0 { "PILE" } else { "XXXX" })
			.collect::<Vec<_>>();
		let pool = rayon::ThreadPoolBuilder::new()
			.num_threads(2)
			.build()
			.unwrap();
		let results = pool.install(|| {
			assert_eq!(rayon::current_num_threads(), 2);
			generate_all(&lexicon, &tops, Budget::UNLIMITED)
		});
		assert_eq!(results.len(), tops.len());
		for (i, result) in results.iter().enumerate()
		{
			if i % 2 == 0
			{
				assert_eq!(
					result.as_ref().unwrap().board_string().unwrap(),
					"PILEAREACOATEND*"
				);
			}
			else
			{
				assert!(result.is_err());
			}
		}
	}
}
