//! Daily Wordle - CLI
//!
//! Play today's word in a TUI or on plain stdin/stdout.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use wordle_daily::{
    commands::{RunContext, run_reset, run_share, run_simple, today_info},
    config::GameConfig,
    core::EvaluationRule,
    logging,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "One five-letter word a day, six tries to find it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST")]
    wordlist: Option<String>,

    /// Session file (default: platform data dir)
    #[arg(long, global = true, env = "WORDLE_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Scoring rule: single-pass (default) or standard
    #[arg(short, long, global = true, env = "WORDLE_RULE")]
    rule: Option<EvaluationRule>,

    /// Play a given day instead of today (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// JSON config file
    #[arg(short, long, global = true, env = "WORDLE_CONFIG")]
    config: Option<PathBuf>,

    /// Keep progress in memory only
    #[arg(long, global = true)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Print the share text for today's finished game
    Share,

    /// Forget the saved session
    Reset,

    /// Show how today's word is selected
    Today {
        /// Also print the word itself
        #[arg(long)]
        reveal: bool,
    },
}

/// Config file first, then command line overrides
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(wordlist) = &cli.wordlist {
        config.wordlist = match wordlist.as_str() {
            "embedded" => None,
            path => Some(PathBuf::from(path)),
        };
    }
    if let Some(state_file) = &cli.state_file {
        config.state_file = Some(state_file.clone());
    }
    if let Some(rule) = cli.rule {
        config.rule = rule;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let config = build_config(&cli)?;
    if matches!(command, Commands::Play) {
        logging::init_file(&config.log_path())?;
    } else {
        logging::init_stderr();
    }
    debug!(?config, "configuration resolved");

    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut ctx = RunContext::new(config, date);
    ctx.ephemeral = cli.no_save;

    match command {
        Commands::Play => run_play_command(&ctx),
        Commands::Simple => run_simple(&ctx),
        Commands::Share => {
            println!("{}", run_share(&ctx)?);
            Ok(())
        }
        Commands::Reset => {
            run_reset(&ctx)?;
            println!("Saved session cleared.");
            Ok(())
        }
        Commands::Today { reveal } => run_today_command(&ctx, *reveal),
    }
}

fn run_play_command(ctx: &RunContext) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let game = ctx.start_game();
    let app = App::new(game, ctx.date, ctx.config.notice_duration());
    run_tui(app)
}

fn run_today_command(ctx: &RunContext, reveal: bool) -> Result<()> {
    let info = today_info(ctx).context("cannot select today's word")?;

    println!("Date key:  {}", info.date_key);
    println!("Hash:      {}", info.hash);
    println!("Value:     {:.6}", info.value);
    println!("Index:     {} of {}", info.index, info.list_len);
    if reveal {
        println!("Word:      {}", info.word.to_uppercase());
    }
    Ok(())
}
