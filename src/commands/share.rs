//! Print the share text for today's finished game

use super::RunContext;
use crate::game::Phase;
use crate::output::encode_share;
use anyhow::{Result, bail};

/// Share text for today's game, if it is over
///
/// # Errors
///
/// Returns an error if no word list is available or today's game is not
/// finished yet.
pub fn run_share(ctx: &RunContext) -> Result<String> {
    let game = ctx.start_game();

    match (game.phase(), game.session()) {
        (Phase::Over(_), Some(session)) => Ok(encode_share(session)),
        (Phase::AwaitingWord, _) => bail!("No word list available; cannot pick today's word"),
        _ => bail!("Today's game is not finished yet"),
    }
}
