//! # Wordtiles
//!
//! Generation of corner-truncated word squares. A [`Dictionary`] is loaded,
//! indexed into a [`Lexicon`], and then searched by the [`solver`] for a board
//! whose rows and columns are all distinct words. The finished [`Board`]
//! serializes to a board string, which a [`Puzzle`] can lay out for play.
//!
//! [`Board`]: board::Board
//! [`Dictionary`]: dictionary::Dictionary
//! [`Lexicon`]: lexicon::Lexicon
//! [`Puzzle`]: puzzle::Puzzle

pub mod board;
pub mod checker;
pub mod dictionary;
pub mod lexicon;
pub mod puzzle;
pub mod solver;
