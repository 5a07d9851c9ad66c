//! Wordle Helper - CLI
//!
//! Narrows the dictionary to the words consistent with your clues, in a TUI
//! or as a one-shot command.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use wordle_helper::{
    core::{Candidate, ConstraintState},
    filter::{FilterOptions, WordleFilter},
    interactive::{App, run_tui},
    logging,
    output::print_filter_response,
    wordlists::{Dictionary, DictionarySource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Lists the Wordle answers still possible given your clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a .txt or .json file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Treat this day (YYYY-MM-DD) as today instead of the local date
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Rank candidates by expected information
    #[arg(short, long, global = true)]
    rank: bool,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Filter once and print the result
    Filter {
        /// Known letters by position, '_' for unknown (e.g. S____)
        #[arg(short, long, default_value = "")]
        known: String,

        /// Letters present but not at a position, comma-separated per position (e.g. ,,IS,,)
        #[arg(short = 'H', long, default_value = "")]
        hints: String,

        /// Letters not in the word (e.g. ADEU)
        #[arg(short, long, default_value = "")]
        banned: String,

        /// Print at most this many candidates
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary selected with -w
fn load_dictionary(words: &str) -> Result<Dictionary> {
    let dictionary = match words {
        "embedded" => Dictionary::embedded(),
        path => load_from_file(path).with_context(|| format!("Loading dictionary '{path}'"))?,
    };

    if dictionary.is_empty() {
        bail!("Dictionary '{words}' has no words");
    }
    Ok(dictionary)
}

fn dictionary_label(dictionary: &Dictionary) -> String {
    let name = match dictionary.source() {
        DictionarySource::Embedded => "embedded".to_string(),
        DictionarySource::Text(path) | DictionarySource::Json(path) => path.display().to_string(),
    };
    format!("{name} ({})", dictionary.len())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // The game resets at local midnight, so "today" is the local calendar day
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let dictionary = load_dictionary(&cli.words)?;
    info!(words = dictionary.len(), %today, "dictionary ready");
    if dictionary.is_stale(today) {
        warn!(
            last_updated = ?dictionary.last_updated(),
            "dictionary has not been updated recently; recent answers may be missing"
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.rank, today),
        Commands::Filter {
            known,
            hints,
            banned,
            limit,
        } => run_filter_command(&dictionary, &known, &hints, &banned, cli.rank, limit, today),
    }
}

fn run_filter_command(
    dictionary: &Dictionary,
    known: &str,
    hints: &str,
    banned: &str,
    rank: bool,
    limit: Option<usize>,
    today: NaiveDate,
) -> Result<()> {
    let state = ConstraintState::parse(known, hints, banned).context("Invalid clues")?;
    let pool: Vec<&Candidate> = dictionary.candidates().iter().collect();

    let options = FilterOptions::new(today).ranked(rank);
    let response = WordleFilter::new().filter(&state, &pool, options);

    print_filter_response(&state, &response, today, limit);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, rank: bool, today: NaiveDate) -> Result<()> {
    let app = App::new(
        dictionary.candidates(),
        dictionary_label(dictionary),
        rank,
        today,
    );
    run_tui(app)
}
