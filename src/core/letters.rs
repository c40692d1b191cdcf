//! Best-known state per letter across all submitted guesses

use super::{Evaluation, Feedback};
use rustc_hash::FxHashMap;

/// Letter → strongest evaluation seen for it
///
/// Derived from the submitted rows and their feedback; never stored on its
/// own. Letters that were never evaluated are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates(FxHashMap<u8, Evaluation>);

impl LetterStates {
    /// Fold submitted guesses into per-letter states
    ///
    /// Rows without feedback are skipped. Severity order is
    /// `Wrong < Close < Correct`, so a letter that was ever correct stays
    /// correct.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Evaluation, EvaluationRule, Feedback, LetterStates, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("react").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret, EvaluationRule::SinglePass);
    ///
    /// let states = LetterStates::aggregate([("react", Some(&feedback))]);
    /// assert_eq!(states.get('a'), Some(Evaluation::Correct));
    /// assert_eq!(states.get('t'), Some(Evaluation::Wrong));
    /// assert_eq!(states.get('z'), None);
    /// ```
    pub fn aggregate<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a Feedback>)>,
    {
        let mut states: FxHashMap<u8, Evaluation> = FxHashMap::default();

        for (guess, feedback) in rows {
            let Some(feedback) = feedback else {
                continue;
            };

            for (&letter, &code) in guess.as_bytes().iter().zip(feedback.codes()) {
                states
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(code))
                    .or_insert(code);
            }
        }

        Self(states)
    }

    /// State for a letter, case-insensitive
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Evaluation> {
        u8::try_from(letter.to_ascii_lowercase())
            .ok()
            .and_then(|byte| self.0.get(&byte).copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluation::{Close, Correct, Wrong};

    #[test]
    fn empty_when_nothing_submitted() {
        let states = LetterStates::aggregate([("cra", None)]);
        assert!(states.is_empty());
        assert_eq!(states.get('c'), None);
    }

    #[test]
    fn correct_wins_over_wrong() {
        let first = Feedback::new([Wrong, Wrong, Wrong, Wrong, Wrong]);
        let second = Feedback::new([Correct, Close, Wrong, Wrong, Wrong]);

        let states =
            LetterStates::aggregate([("stomp", Some(&first)), ("salad", Some(&second))]);

        assert_eq!(states.get('s'), Some(Correct));
        assert_eq!(states.get('a'), Some(Close));
        assert_eq!(states.get('t'), Some(Wrong));
    }

    #[test]
    fn later_weaker_evidence_does_not_downgrade() {
        let strong = Feedback::new([Correct, Wrong, Wrong, Wrong, Wrong]);
        let weak = Feedback::new([Wrong, Wrong, Close, Wrong, Wrong]);

        let states = LetterStates::aggregate([("eight", Some(&strong)), ("maker", Some(&weak))]);
        assert_eq!(states.get('e'), Some(Correct));
        assert_eq!(states.get('k'), Some(Close));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let feedback = Feedback::new([Close; 5]);
        let states = LetterStates::aggregate([("brown", Some(&feedback))]);
        assert_eq!(states.get('B'), Some(Close));
        assert_eq!(states.get('é'), None);
        assert_eq!(states.len(), 5);
    }
}
