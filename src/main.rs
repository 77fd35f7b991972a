//! # Wordtiles
//!
//! Wordtiles is a sliding-tile word puzzle. The board is a 4×4 grid with the
//! bottom-right corner missing: three rows of four letters, a last row of
//! three, and every column likewise a word. The player is handed the letters
//! scrambled, and must slide them back into place through the blank cells.
//!
//! This program generates such boards from a dictionary and a chosen top word,
//! printing them as board strings for other puzzle surfaces, and can also play
//! a freshly generated board in a text-based user interface (TUI).

mod app;
mod tui;

use std::{process::ExitCode, time::Duration};

use clap::{Parser, Subcommand};
use log::{debug, error, trace};
use rand::{rngs::StdRng, thread_rng, SeedableRng};

use app::App;
use tui::tui;
use wordtiles::{
	dictionary::Dictionary,
	lexicon::Lexicon,
	puzzle::Puzzle,
	solver::{generate, generate_all, Budget, Outcome}
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for generating and playing Wordtiles boards.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0")]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the CSV and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "english")]
	dictionary: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Index,

	/// Generate one board per top word, concurrently, and print each board
	/// string on its own line, in order. A top word without a board prints
	/// `NO SOLUTION`, or `BUDGET EXHAUSTED` if the search gave up.
	Generate {
		/// The words to place in the top row.
		#[arg(required = true)]
		tops: Vec<String>,

		/// Give up after considering this many candidate words.
		#[arg(long)]
		max_nodes: Option<u64>,

		/// Give up after this many milliseconds.
		#[arg(long)]
		max_millis: Option<u64>
	},

	/// Generate a board for the top word, scramble it, and open the
	/// text-based user interface (TUI) to play it.
	Play {
		/// The word to place in the top row.
		top: String,

		/// Seed the scramble, for a reproducible puzzle.
		#[arg(short = 's', long)]
		seed: Option<u64>
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main() -> ExitCode
{
	env_logger::init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	// Open the dictionary, creating the binary dictionary if necessary. No
	// generation happens without a usable dictionary.
	let dictionary = match Dictionary::open(&opts.directory, &opts.dictionary)
	{
		Ok(dictionary) => dictionary,
		Err(e) =>
		{
			error!(
				"Failed to open dictionary: {}/{}.dict or {0}/{1}.csv: {}",
				opts.directory,
				opts.dictionary,
				e
			);
			return ExitCode::FAILURE
		}
	};

	// Execute the appropriate subcommand.
	match opts.command
	{
		Command::Index =>
		{
			trace!("Exiting after generating binary dictionary");
			ExitCode::SUCCESS
		},
		Command::Generate { tops, max_nodes, max_millis } =>
		{
			let lexicon = Lexicon::new(dictionary.words());
			let budget = Budget {
				max_nodes,
				max_duration: max_millis.map(Duration::from_millis)
			};
			print_boards(&lexicon, &tops, budget)
		},
		Command::Play { top, seed } =>
		{
			let lexicon = Lexicon::new(dictionary.words());
			play(&lexicon, &top, seed)
		}
	}
}

/// Generate and print a board for each top word.
///
/// # Arguments
///
/// * `lexicon` - The lexicon.
/// * `tops` - The top words.
/// * `budget` - The limits on each search.
///
/// # Returns
///
/// Failure if any top word was refused, success otherwise.
fn print_boards(lexicon: &Lexicon, tops: &[String], budget: Budget) -> ExitCode
{
	let mut status = ExitCode::SUCCESS;
	for (top, result) in tops.iter().zip(generate_all(lexicon, tops, budget))
	{
		match result
		{
			Ok(outcome) => println!("{}", outcome),
			Err(e) =>
			{
				error!("{}: {}", top, e);
				println!("INVALID");
				status = ExitCode::FAILURE;
			}
		}
	}
	status
}

/// Generate a board for the top word and play it in the TUI. Reports whether
/// the player solved it.
///
/// # Arguments
///
/// * `lexicon` - The lexicon.
/// * `top` - The top word.
/// * `seed` - The scramble seed, if any.
///
/// # Returns
///
/// Failure if no board could be generated or the TUI failed, success
/// otherwise.
fn play(lexicon: &Lexicon, top: &str, seed: Option<u64>) -> ExitCode
{
	let board = match generate(lexicon, top, Budget::UNLIMITED)
	{
		Ok(Outcome::Solved(board)) => board,
		Ok(outcome) =>
		{
			error!("{}: {}", top, outcome);
			return ExitCode::FAILURE
		},
		Err(e) =>
		{
			error!("{}", e);
			return ExitCode::FAILURE
		}
	};
	let board_string = board.to_board_string();
	let mut puzzle = match Puzzle::new(&board_string)
	{
		Ok(puzzle) => puzzle,
		Err(e) =>
		{
			error!("{}: {}", board_string, e);
			return ExitCode::FAILURE
		}
	};
	match seed
	{
		Some(seed) => puzzle.scramble(&mut StdRng::seed_from_u64(seed)),
		None => puzzle.scramble(&mut thread_rng())
	}
	trace!("Opening TUI");
	match tui(|terminal| App::new(puzzle).run(terminal))
	{
		Ok(solved) =>
		{
			println!("{}", board_string);
			println!("{}", if solved { "Solved!" } else { "Unsolved." });
			ExitCode::SUCCESS
		},
		Err(e) =>
		{
			error!("Failed to drive TUI: {}", e);
			ExitCode::FAILURE
		}
	}
}
