//! Benchmark command
//!
//! Times the unscrambler on random letter bags drawn from a standard tile set.

use super::{QueryError, require_loaded};
use crate::core::{LetterBag, WILDCARD};
use crate::corpus::Corpus;
use crate::solver::solve_bag;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};
use tracing::info;

/// Letter tiles of a standard 98-tile set (blanks are added separately)
const TILE_SET: &str = concat!(
    "eeeeeeeeeeee",
    "aaaaaaaaa",
    "iiiiiiiii",
    "oooooooo",
    "nnnnnn",
    "rrrrrr",
    "tttttt",
    "llll",
    "ssss",
    "uuuu",
    "dddd",
    "ggg",
    "bbccmmppffhhvvwwyy",
    "kjxqz",
);

/// Benchmark parameters
pub struct BenchmarkConfig {
    /// Number of queries to run
    pub count: usize,
    /// Letter tiles per query
    pub letters: usize,
    /// Blank tiles per query
    pub wildcards: usize,
    /// RNG seed; random when `None`
    pub seed: Option<u64>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 200,
            letters: 7,
            wildcards: 0,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub queries: usize,
    pub seed: u64,
    pub total_matches: usize,
    pub duration: Duration,
    pub fastest: Duration,
    pub slowest: Duration,
    /// Bag that took longest to solve
    pub slowest_bag: Option<String>,
    pub queries_per_second: f64,
}

impl BenchmarkResult {
    /// Mean time per query
    #[must_use]
    pub fn average(&self) -> Duration {
        if self.queries == 0 {
            return Duration::ZERO;
        }
        self.duration / u32::try_from(self.queries).unwrap_or(u32::MAX)
    }

    /// Mean number of words found per query
    #[must_use]
    pub fn average_matches(&self) -> f64 {
        if self.queries == 0 {
            return 0.0;
        }
        self.total_matches as f64 / self.queries as f64
    }
}

/// Draw a random bag of `letters` tiles plus `wildcards` blanks
///
/// Tiles are drawn without replacement, so letter frequencies follow the
/// tile set. At most the whole tile set is drawn.
pub fn random_bag(rng: &mut StdRng, letters: usize, wildcards: usize) -> String {
    let mut tiles: Vec<char> = TILE_SET.chars().collect();
    tiles.shuffle(rng);
    tiles.truncate(letters);
    tiles.extend(std::iter::repeat_n(WILDCARD, wildcards));
    tiles.into_iter().collect()
}

/// Run the unscrambler on random bags and collect timings
///
/// # Errors
///
/// Returns an error if the corpus has not been loaded.
pub fn run_benchmark(
    corpus: &Corpus,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, QueryError> {
    require_loaded(corpus)?;

    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = if config.show_progress {
        ProgressBar::new(config.count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut total_matches = 0;
    let mut fastest = Duration::MAX;
    let mut slowest = Duration::ZERO;
    let mut slowest_bag = None;

    let start = Instant::now();
    for _ in 0..config.count {
        let bag_text = random_bag(&mut rng, config.letters, config.wildcards);
        let bag = LetterBag::parse(&bag_text);

        let query_start = Instant::now();
        let found = solve_bag(corpus, &bag);
        let elapsed = query_start.elapsed();

        total_matches += found.len();
        fastest = fastest.min(elapsed);
        if elapsed >= slowest {
            slowest = elapsed;
            slowest_bag = Some(bag_text);
        }

        pb.set_message(format!("{} words", found.len()));
        pb.inc(1);
    }
    let duration = start.elapsed();
    pb.finish_and_clear();

    if config.count == 0 {
        fastest = Duration::ZERO;
    }

    info!(
        queries = config.count,
        seed,
        elapsed = ?duration,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        queries: config.count,
        seed,
        total_matches,
        duration,
        fastest,
        slowest,
        slowest_bag,
        queries_per_second: config.count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::TextSource;

    fn quiet(count: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(seed),
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn tile_set_has_98_letters() {
        assert_eq!(TILE_SET.len(), 98);
        assert!(TILE_SET.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn random_bag_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let bag = random_bag(&mut rng, 7, 2);
        assert_eq!(bag.chars().count(), 9);
        assert_eq!(bag.chars().filter(|&c| c == WILDCARD).count(), 2);
    }

    #[test]
    fn random_bag_is_deterministic_per_seed() {
        let a = random_bag(&mut StdRng::seed_from_u64(42), 7, 0);
        let b = random_bag(&mut StdRng::seed_from_u64(42), 7, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn random_bag_never_exceeds_tile_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_bag(&mut rng, 500, 0).len(), 98);
    }

    #[test]
    fn benchmark_runs() {
        let corpus = Corpus::embedded();
        corpus.load();

        let result = run_benchmark(&corpus, &quiet(10, 3)).unwrap();
        assert_eq!(result.queries, 10);
        assert_eq!(result.seed, 3);
        assert!(result.fastest <= result.slowest);
        assert!(result.slowest_bag.is_some());
        assert!(result.average() <= result.duration);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let corpus = Corpus::embedded();
        corpus.load();

        let first = run_benchmark(&corpus, &quiet(5, 99)).unwrap();
        let second = run_benchmark(&corpus, &quiet(5, 99)).unwrap();
        assert_eq!(first.total_matches, second.total_matches);
    }

    #[test]
    fn benchmark_with_zero_queries() {
        let corpus = Corpus::from_words(["cat"]);
        let result = run_benchmark(&corpus, &quiet(0, 1)).unwrap();

        assert_eq!(result.queries, 0);
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.fastest, Duration::ZERO);
        assert_eq!(result.average(), Duration::ZERO);
        assert!(result.average_matches().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_requires_loaded_corpus() {
        let corpus = Corpus::new(TextSource::new("cat"));
        assert!(run_benchmark(&corpus, &quiet(1, 1)).is_err());
    }
}
