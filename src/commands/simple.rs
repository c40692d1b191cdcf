//! Simple line-oriented mode
//!
//! Text-based game without the TUI: one guess per line.

use super::RunContext;
use crate::core::{Evaluation, LetterStates};
use crate::game::{Game, InputToken, Phase, Session, Step};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::output::encode_share;
use crate::storage::SessionStore;
use anyhow::{Result, bail};
use colored::{ColoredString, Colorize};
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if no word list is available or on an I/O error while
/// reading input or writing output.
pub fn run_simple(ctx: &RunContext) -> Result<()> {
    let mut game = ctx.start_game();
    if game.phase() == Phase::AwaitingWord {
        bail!("No word list available; cannot pick today's word");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(&mut game, stdin.lock(), &mut stdout.lock())
}

/// Drive a started game from line input
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_lines<S, R, W>(game: &mut Game<S>, input: R, out: &mut W) -> Result<()>
where
    S: SessionStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║            Daily  Wordle             ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(out, "Type a word and press Enter. 'quit' to leave.\n")?;

    report_storage_error(game, out)?;
    if let Some(session) = game.session()
        && session.guess_count() > 0
    {
        writeln!(out, "Resuming today's game:")?;
        print_board(session, out)?;
    }

    let mut lines = input.lines();
    while game.phase() == Phase::Playing {
        let row = game.session().map_or(0, Session::active_row);
        write!(out, "Guess {}: ", row + 1)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;
        let line = line.trim();

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(out, "\n👋 Progress saved. See you later!\n")?;
            return Ok(());
        }

        let step = enter_word(game, line);
        report_storage_error(game, out)?;

        match step {
            Step::Rejected(rejection) => {
                writeln!(out, "  {}", rejection.message().red().bold())?;
                // No timer in line mode; the message has been shown
                game.acknowledge_notice();
            }
            Step::Evaluated { .. } => {
                if let Some(session) = game.session() {
                    print_board(session, out)?;
                    print_keyboard(&session.letter_states(), out)?;
                }
            }
            _ => writeln!(out, "  {}", "Enter a five-letter word".yellow())?,
        }
    }

    if let Some(session) = game.session() {
        print_result(session, out)?;
    }
    Ok(())
}

/// Replace the active row with `word` and submit it
fn enter_word<S: SessionStore>(game: &mut Game<S>, word: &str) -> Step {
    while game.handle(InputToken::Delete) == Step::Deleted {}

    for ch in word.chars() {
        if game.handle(InputToken::Letter(ch)) == Step::Ignored {
            return Step::Ignored;
        }
    }

    game.handle(InputToken::Submit)
}

fn colorize(text: &str, evaluation: Option<Evaluation>) -> ColoredString {
    match evaluation {
        Some(Evaluation::Correct) => text.black().on_green().bold(),
        Some(Evaluation::Close) => text.black().on_yellow().bold(),
        Some(Evaluation::Wrong) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

fn print_board<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for (guess, feedback) in session.submitted() {
        write!(out, "   ")?;
        for (letter, &code) in guess.chars().zip(feedback.codes()) {
            let cell = format!(" {} ", letter.to_ascii_uppercase());
            write!(out, "{}", colorize(&cell, Some(code)))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

fn print_keyboard<W: Write>(states: &LetterStates, out: &mut W) -> io::Result<()> {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        write!(out, "   {}", " ".repeat(indent))?;
        for letter in row.chars() {
            let key = letter.to_ascii_uppercase().to_string();
            write!(out, "{} ", colorize(&key, states.get(letter)))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

fn print_result<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    if session.is_won() {
        let guesses = session.guess_count();
        let cheer = match guesses {
            1 => "🏆 Hole in one!",
            2 => "⭐ Magnificent!",
            3 => "💫 Splendid!",
            4 => "✨ Great!",
            5 => "👍 Nice!",
            _ => "😅 Phew!",
        };
        writeln!(out, "  {}", cheer.bright_green().bold())?;
    } else {
        writeln!(
            out,
            "  {} The word was {}",
            "❌ Out of guesses.".red().bold(),
            session.secret().text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}\n", encode_share(session))
}

fn report_storage_error<S: SessionStore, W: Write>(game: &mut Game<S>, out: &mut W) -> io::Result<()> {
    if let Some(e) = game.take_storage_error() {
        writeln!(out, "  {} {e}", "⚠ Progress may not be saved:".yellow())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EvaluationRule;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn game() -> Game<MemoryStore> {
        let words = WordList::new(words_from_slice(&[
            "genie", "crane", "react", "slate", "audio", "irate", "stare", "house", "mouse",
            "apple",
        ]));
        let mut game = Game::new(EvaluationRule::SinglePass, MemoryStore::new());
        game.on_word_list(Ok(words), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        game
    }

    fn run(game: &mut Game<MemoryStore>, input: &str) -> String {
        let mut out = Vec::new();
        play_lines(game, Cursor::new(input.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plays_to_a_win() {
        let mut game = game();
        let output = run(&mut game, "crane\ngenie\n");

        assert_eq!(game.phase(), Phase::Over(crate::game::Outcome::Won));
        assert!(output.contains("Daily Wordle: won in 2 guesses"));
    }

    #[test]
    fn reports_rejections_and_continues() {
        let mut game = game();
        let output = run(&mut game, "zzzzz\ncrane\ncrane\nab\nquit\n");

        assert!(output.contains("Not in word list"));
        assert!(output.contains("Already guessed"));
        assert!(output.contains("Enter a five-letter word"));
        let session = game.session().unwrap();
        assert_eq!(session.guess_count(), 1);
        assert!(game.notice().is_none());
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let mut game = game();
        run(&mut game, "crane\n");
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.session().unwrap().active_row(), 1);
    }

    #[test]
    fn loss_reveals_the_word() {
        let mut game = game();
        let output = run(&mut game, "crane\nreact\nslate\naudio\nirate\nhouse\n");

        assert!(output.contains("GENIE"));
        assert!(output.contains("Daily Wordle: lost"));
    }
}
