//! Command implementations
//!
//! Each command builds its game from a shared [`RunContext`]: which words to
//! use, where the session lives, and which day it is.

pub mod reset;
pub mod share;
pub mod simple;
pub mod today;

pub use reset::run_reset;
pub use share::run_share;
pub use simple::run_simple;
pub use today::{TodayInfo, today_info};

use crate::config::GameConfig;
use crate::game::Game;
use crate::storage::{FileStore, MemoryStore, SessionStore};
use crate::wordlists::{EmbeddedWords, FileWords, WordSource};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Everything a command needs to start a game
pub struct RunContext {
    pub config: GameConfig,
    pub date: NaiveDate,
    /// Keep the session in memory only
    pub ephemeral: bool,
}

impl RunContext {
    #[must_use]
    pub const fn new(config: GameConfig, date: NaiveDate) -> Self {
        Self {
            config,
            date,
            ephemeral: false,
        }
    }

    /// Word source named by the config
    #[must_use]
    pub fn word_source(&self) -> Box<dyn WordSource> {
        match &self.config.wordlist {
            Some(path) => Box::new(FileWords::new(path)),
            None => Box::new(EmbeddedWords),
        }
    }

    /// Session store named by the config
    ///
    /// Falls back to memory when no data directory can be resolved.
    #[must_use]
    pub fn store(&self) -> Box<dyn SessionStore> {
        if self.ephemeral {
            return Box::new(MemoryStore::new());
        }

        if let Some(path) = self.config.state_path() {
            info!(path = %path.display(), "using session file");
            Box::new(FileStore::new(path))
        } else {
            warn!("no data directory available, session will not be saved");
            Box::new(MemoryStore::new())
        }
    }

    /// Build a game and deliver its word list
    ///
    /// The game may still be waiting afterwards if the list could not be
    /// fetched; callers check `Game::phase`.
    #[must_use]
    pub fn start_game(&self) -> Game<Box<dyn SessionStore>> {
        let source = self.word_source();
        info!(source = %source.describe(), "fetching word list");

        let mut game = Game::new(self.config.rule, self.store());
        game.on_word_list(source.fetch(), self.date);
        game
    }
}
