//! Deterministic word of the day
//!
//! The secret depends only on the calendar date and the word list, so every
//! player with the same list sees the same word on the same day and a rerun
//! reproduces it without any stored state.
//!
//! # Algorithm
//! 1. Encode the date as `"day-month-year"` (month 1-based, no padding)
//! 2. Rolling hash `hash = hash * 31 + byte` with signed 32-bit wraparound
//! 3. `frac(sin(hash) * 10000)` gives a value in `[0, 1)`
//! 4. Scale by the list length and take the floor as the index

use crate::core::Word;
use crate::wordlists::WordList;
use chrono::{Datelike, NaiveDate};

/// Canonical date key fed to the hash
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

/// Polynomial rolling hash with `i32` wraparound
#[must_use]
pub fn rolling_hash(key: &str) -> i32 {
    key.bytes()
        .fold(0i32, |hash, byte| hash.wrapping_mul(31).wrapping_add(i32::from(byte)))
}

/// Map a hash onto `[0, 1)` through `sin`
///
/// Uses `x - floor(x)`, so negative products also land in `[0, 1)`.
#[must_use]
pub fn unit_value(hash: i32) -> f64 {
    let x = f64::from(hash).sin() * 10_000.0;
    x - x.floor()
}

/// Index of the daily word in a list of `len` words
///
/// Returns `None` for an empty list.
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let value = unit_value(rolling_hash(&date_key(date)));
    let index = (value * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

/// Pick the secret word for `date`
///
/// Returns `None` when the list is empty; selection is retried once a
/// non-empty list arrives.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::game::select_daily_word;
/// use wordle_daily::wordlists::{WordList, loader::words_from_slice};
///
/// let list = WordList::new(words_from_slice(&["crane", "slate", "genie"]));
/// let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
///
/// let first = select_daily_word(&list, date);
/// assert_eq!(first, select_daily_word(&list, date));
/// assert!(select_daily_word(&WordList::default(), date).is_none());
/// ```
#[must_use]
pub fn select_daily_word(words: &WordList, date: NaiveDate) -> Option<&Word> {
    daily_index(date, words.len()).and_then(|index| words.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ten_words() -> WordList {
        WordList::new(words_from_slice(&[
            "crane", "slate", "genie", "audio", "irate", "stare", "adieu", "house", "mouse",
            "apple",
        ]))
    }

    #[test]
    fn date_key_is_day_month_year() {
        assert_eq!(date_key(date(2026, 10, 16)), "16-10-2026");
        assert_eq!(date_key(date(2024, 1, 1)), "1-1-2024");
    }

    #[test]
    fn rolling_hash_wraps_like_i32() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("16-10-2026"), -1_080_131_512);
        assert_eq!(rolling_hash("1-1-2024"), -2_067_722_696);
        assert_eq!(rolling_hash("5-3-2025"), 665_809_651);
    }

    #[test]
    fn unit_value_in_range_for_negative_hashes() {
        for hash in [i32::MIN, -1_080_131_512, -1, 0, 1, 97, i32::MAX] {
            let value = unit_value(hash);
            assert!((0.0..1.0).contains(&value), "hash {hash} gave {value}");
        }
    }

    #[test]
    fn selection_is_deterministic() {
        let list = ten_words();
        let day = date(2026, 10, 16);

        let first = select_daily_word(&list, day).cloned();
        for _ in 0..10 {
            assert_eq!(select_daily_word(&list, day).cloned(), first);
        }
    }

    #[test]
    fn known_days_pick_known_words() {
        let list = ten_words();
        // frac(sin(hash) * 10000) is ~0.0498 and ~0.5042 for these dates
        assert_eq!(daily_index(date(2026, 10, 16), list.len()), Some(0));
        assert_eq!(daily_index(date(2024, 1, 1), list.len()), Some(5));
        assert_eq!(
            select_daily_word(&list, date(2024, 1, 1)).map(Word::text),
            Some("stare")
        );
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert_eq!(daily_index(date(2026, 10, 16), 0), None);
        assert!(select_daily_word(&WordList::default(), date(2026, 10, 16)).is_none());
    }

    #[test]
    fn index_always_in_bounds() {
        let mut day = date(2024, 1, 1);
        for _ in 0..800 {
            for len in [1, 2, 7, 796] {
                let index = daily_index(day, len).unwrap();
                assert!(index < len);
            }
            day = day.succ_opt().unwrap();
        }
    }
}
