//! Boggle Solver
//!
//! Finds every dictionary word in a letter grid and generates grids that meet
//! word-count, word-length and rarity targets.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::Grid;
//! use boggle_solver::dictionary::DictionaryIndex;
//! use boggle_solver::solver::find_words;
//!
//! let dictionary = DictionaryIndex::build(["abe", "bf", "cg"]);
//! let grid = Grid::parse_letters("4abcdefghijklmnop").unwrap();
//!
//! let words = find_words(&grid, &dictionary, 20);
//! assert!(words.contains("abe"));
//! assert_eq!(words.len(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary trie and word lists
pub mod dictionary;

// Letter distributions and sampling
pub mod letters;

// Grid word search
pub mod solver;

// Puzzle generation
pub mod generator;

// Leaderboard persistence
pub mod store;

// Logger setup
pub mod log;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
