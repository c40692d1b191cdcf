//! The game engine
//!
//! Daily word selection, the session grid, and the state machine that turns
//! key input into evaluated rows.

mod daily;
mod machine;
mod notice;
mod session;

pub use daily::{daily_index, date_key, rolling_hash, select_daily_word, unit_value};
pub use machine::{Game, InputToken, Phase, Step};
pub use notice::{Notice, Rejection};
pub use session::{Outcome, Session, SessionError};
