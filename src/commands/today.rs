//! Describe how today's word is picked

use super::RunContext;
use crate::game::{daily_index, date_key, rolling_hash, unit_value};
use anyhow::{Context, Result};

/// Selection details for one day
#[derive(Debug, Clone, PartialEq)]
pub struct TodayInfo {
    pub date_key: String,
    pub hash: i32,
    pub value: f64,
    pub index: usize,
    pub list_len: usize,
    pub word: String,
}

/// Work out today's selection without touching the saved session
///
/// # Errors
///
/// Returns an error if the word list cannot be fetched.
pub fn today_info(ctx: &RunContext) -> Result<TodayInfo> {
    let words = ctx.word_source().fetch().context("fetching word list")?;

    let key = date_key(ctx.date);
    let hash = rolling_hash(&key);
    let index = daily_index(ctx.date, words.len()).context("word list is empty")?;
    let word = words
        .get(index)
        .map(|w| w.text().to_string())
        .context("selected index out of range")?;

    Ok(TodayInfo {
        date_key: key,
        hash,
        value: unit_value(hash),
        index,
        list_len: words.len(),
        word,
    })
}
