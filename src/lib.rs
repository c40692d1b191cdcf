//! Daily Wordle
//!
//! A daily word-guessing game: every player gets the same five-letter word
//! for a given calendar day, six tries to find it, and colored feedback after
//! each guess. Progress is saved so a game can be resumed later that day.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use wordle_daily::core::EvaluationRule;
//! use wordle_daily::game::{Game, InputToken, Phase};
//! use wordle_daily::storage::MemoryStore;
//! use wordle_daily::wordlists::{EmbeddedWords, WordSource};
//!
//! let mut game = Game::new(EvaluationRule::default(), MemoryStore::new());
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! assert_eq!(game.on_word_list(EmbeddedWords.fetch(), today), Phase::Playing);
//!
//! for key in ["c", "r", "a", "n", "e", "enter"] {
//!     let token = InputToken::parse(key).unwrap();
//!     println!("{:?}", game.handle(token));
//! }
//! ```

// Core domain types
pub mod core;

// Daily selection, session grid and state machine
pub mod game;

// Session persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Configuration and logging
pub mod config;
pub mod logging;
