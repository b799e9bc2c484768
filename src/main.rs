//! Word Finder - CLI
//!
//! Unscramble letters, match crossword patterns and look up anagrams, from the
//! command line or an interactive TUI.

use anyhow::{Result, ensure};
use clap::{ArgAction, Parser, Subcommand};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordfinder::{
    commands::{
        BenchmarkConfig, UnscrambleConfig, check_word, corpus_report, find_anagrams,
        find_pattern, run_benchmark, unscramble,
    },
    config::{LoadConfig, QueryLimits},
    corpus::Corpus,
    output::{
        print_anagrams, print_benchmark_result, print_corpus_report, print_pattern_result,
        print_unscramble_result, print_word_check,
    },
    wordlists::{EmbeddedSource, FileSource},
};

#[derive(Parser)]
#[command(
    name = "wordfinder",
    about = "Unscramble letter tiles, match crossword patterns and find anagrams",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "embedded",
        env = "WORDFINDER_WORDLIST"
    )]
    wordlist: String,

    /// Extra attempts when the word list cannot be read
    #[arg(long, global = true, default_value = "0")]
    retries: u32,

    /// Pause between attempts, in milliseconds
    #[arg(long, global = true, default_value = "250")]
    retry_delay_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Longest letter bag accepted, blanks included
        #[arg(long, default_value_t = QueryLimits::DEFAULT_MAX_LETTERS)]
        max_letters: usize,
    },

    /// Find every word that can be made from a set of letters ('?' is a blank)
    Unscramble {
        /// Letter tiles, e.g. "retains" or "ret?ins"
        letters: String,

        /// Maximum number of words to show
        #[arg(short, long, default_value_t = QueryLimits::DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Shortest word to show
        #[arg(short = 'm', long, default_value = "2")]
        min_length: usize,

        /// Group words by length
        #[arg(short, long)]
        grouped: bool,

        /// Longest letter bag accepted, blanks included
        #[arg(long, default_value_t = QueryLimits::DEFAULT_MAX_LETTERS)]
        max_letters: usize,
    },

    /// Find words matching a crossword pattern ('?' is any letter)
    Pattern {
        /// Pattern, e.g. "c?t" or "??ing"
        pattern: String,

        /// Maximum number of matches to show
        #[arg(short, long, default_value_t = QueryLimits::DEFAULT_MAX_RESULTS)]
        limit: usize,
    },

    /// Find words using exactly the given letters
    Anagram {
        /// Letters to rearrange
        letters: String,
    },

    /// Check whether a word is in the dictionary and show its score
    Check {
        /// Word to look up
        word: String,
    },

    /// Show dictionary statistics
    Stats,

    /// Benchmark the unscrambler on random letter bags
    Benchmark {
        /// Number of random bags to solve
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Letter tiles per bag
        #[arg(short, long, default_value = "7")]
        letters: usize,

        /// Blank tiles per bag
        #[arg(short, long, default_value = "0")]
        blanks: usize,

        /// Seed for reproducible bags
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Install the tracing subscriber; `RUST_LOG` overrides `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the corpus selected by the -w flag
fn build_corpus(cli: &Cli) -> Corpus {
    let config = LoadConfig::with_retries(
        cli.retries.saturating_add(1),
        Duration::from_millis(cli.retry_delay_ms),
    );

    match cli.wordlist.as_str() {
        "embedded" => Corpus::with_config(EmbeddedSource, config),
        path => Corpus::with_config(FileSource::new(path), config),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = build_corpus(&cli);
    let stats = corpus.load();
    debug!(loaded = stats.loaded, words = stats.total_words, "corpus ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        max_letters: QueryLimits::DEFAULT_MAX_LETTERS,
    });

    match command {
        Commands::Play { max_letters } => run_play_command(&corpus, max_letters),
        Commands::Unscramble {
            letters,
            limit,
            min_length,
            grouped,
            max_letters,
        } => {
            let config = UnscrambleConfig {
                letters,
                min_length,
                limit: Some(limit),
            };
            let limits = QueryLimits {
                max_letters,
                max_results: limit,
            };
            let result = unscramble(&corpus, &config, &limits)?;
            print_unscramble_result(&result, grouped);
            Ok(())
        }
        Commands::Pattern { pattern, limit } => {
            let result = find_pattern(&corpus, &pattern, limit)?;
            print_pattern_result(&result);
            Ok(())
        }
        Commands::Anagram { letters } => {
            let anagrams = find_anagrams(&corpus, &letters)?;
            print_anagrams(&letters, &anagrams);
            Ok(())
        }
        Commands::Check { word } => {
            let check = check_word(&corpus, &word)?;
            print_word_check(&check);
            Ok(())
        }
        Commands::Stats => {
            print_corpus_report(&corpus_report(&corpus));
            Ok(())
        }
        Commands::Benchmark {
            count,
            letters,
            blanks,
            seed,
        } => {
            println!("Running benchmark on {count} random bags of {letters} letters...");
            let config = BenchmarkConfig {
                count,
                letters,
                wildcards: blanks,
                seed,
                show_progress: true,
            };
            let result = run_benchmark(&corpus, &config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(corpus: &Corpus, max_letters: usize) -> Result<()> {
    use wordfinder::interactive::{App, run_tui};

    ensure!(
        corpus.is_ready(),
        "word list {} could not be loaded",
        corpus.source_description()
    );

    let limits = QueryLimits {
        max_letters,
        ..QueryLimits::default()
    };
    run_tui(App::new(corpus, limits))
}
