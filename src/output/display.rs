//! Display functions for command results

use super::formatters::{create_progress_bar, plural, scored_rows, word_columns};
use crate::commands::{BenchmarkResult, CorpusReport, PatternResult, UnscrambleResult, WordCheck};
use crate::solver::group_by_length;
use colored::Colorize;

const RULE_WIDTH: usize = 60;
const WORDS_PER_ROW: usize = 5;

fn header(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(RULE_WIDTH).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(RULE_WIDTH).cyan());
}

/// Print the words found for a letter bag
///
/// With `grouped`, words are listed under a heading per length, longest first.
pub fn print_unscramble_result(result: &UnscrambleResult<'_>, grouped: bool) {
    header("UNSCRAMBLE:", &result.tiles);

    if result.total == 0 {
        println!("\n{}", "No words can be made from these letters.".yellow());
        return;
    }

    if let Some(best) = result.best() {
        println!(
            "\n🏆 Best: {} {}",
            best.word.to_uppercase().green().bold(),
            format!("({} points)", best.score).bright_yellow()
        );
    }
    if result.wildcards > 0 {
        println!(
            "   {}",
            format!(
                "{} in play, scored as the letters they fill",
                plural(result.wildcards, "blank")
            )
            .bright_black()
        );
    }

    if grouped {
        for (len, words) in group_by_length(&result.words) {
            println!(
                "\n{} {}",
                format!("{len} letters").bright_cyan().bold(),
                format!("({})", words.len()).bright_black()
            );
            for row in scored_rows(&words, WORDS_PER_ROW) {
                println!("   {row}");
            }
        }
    } else {
        println!();
        for (rank, word) in result.words.iter().enumerate() {
            println!(
                "{:>4}. {:<16} {}",
                rank + 1,
                word.word,
                word.score.to_string().bright_yellow()
            );
        }
    }

    println!("\n✅ Found {}", plural(result.total, "word").green().bold());
    if result.hidden() > 0 {
        println!(
            "   {}",
            format!("{} more not shown", result.hidden()).bright_black()
        );
    }
}

/// Print words matching a crossword pattern
pub fn print_pattern_result(result: &PatternResult<'_>) {
    header("PATTERN:", &result.pattern);

    if result.shown.is_empty() {
        println!("\n{}", "No words match this pattern.".yellow());
        return;
    }

    println!();
    for row in word_columns(&result.shown, WORDS_PER_ROW) {
        println!("   {row}");
    }

    println!("\n✅ {} match", plural(result.total, "word").green().bold());
    if result.hidden() > 0 {
        println!(
            "   {}",
            format!(
                "showing first {}, {} more hidden",
                result.shown.len(),
                result.hidden()
            )
            .bright_black()
        );
    }
}

/// Print a dictionary lookup
pub fn print_word_check(check: &WordCheck<'_>) {
    header("WORD:", &check.word);

    if check.in_dictionary {
        println!("\n✅ {}", "In the dictionary".green().bold());
    } else {
        println!("\n❌ {}", "Not in the dictionary".red().bold());
    }
    println!(
        "   Score:     {}",
        check.score.to_string().bright_yellow().bold()
    );

    if check.anagrams.is_empty() {
        println!("   Anagrams:  {}", "none".bright_black());
    } else {
        println!("   Anagrams:  {}", check.anagrams.join(", ").cyan());
    }
}

/// Print exact anagrams of a set of letters
pub fn print_anagrams(letters: &str, anagrams: &[&str]) {
    header("ANAGRAMS:", letters);

    if anagrams.is_empty() {
        println!("\n{}", "No words use exactly these letters.".yellow());
        return;
    }
    println!();
    for row in word_columns(anagrams, WORDS_PER_ROW) {
        println!("   {row}");
    }
    println!("\n✅ {}", plural(anagrams.len(), "anagram").green().bold());
}

/// Print the corpus status and length distribution
pub fn print_corpus_report(report: &CorpusReport) {
    header("DICTIONARY:", "status");

    println!("\n📚 {}", "Source:".bright_cyan().bold());
    println!("   {}", report.source);

    if !report.stats.loaded {
        println!("\n❌ {}", "Not loaded".red().bold());
        return;
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!(
        "   Words:            {}",
        report.stats.total_words.to_string().bright_yellow().bold()
    );
    if let Some(longest) = report.longest() {
        println!("   Longest word:     {longest} letters");
    }
    if let Some(common) = report.most_common_length() {
        println!("   Most common:      {common} letters");
    }

    let Some(peak) = report.by_length.iter().map(|&(_, count)| count).max() else {
        return;
    };
    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for &(len, count) in &report.by_length {
        let bar = create_progress_bar(count as f64, peak as f64, 40);
        println!("   {len:>2}: {} {count:6}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    header("BENCHMARK", "results");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.queries);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Average time:     {}",
        format!("{:.3?}", result.average()).bright_yellow().bold()
    );
    println!(
        "   Fastest:          {}",
        format!("{:.3?}", result.fastest).green()
    );
    println!(
        "   Slowest:          {}",
        format!("{:.3?}", result.slowest).yellow()
    );
    if let Some(bag) = &result.slowest_bag {
        println!("   Slowest bag:      {}", bag.to_uppercase());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    println!("\n📈 {}", "Results:".bright_cyan().bold());
    println!("   Words found:      {}", result.total_matches);
    println!("   Average/query:    {:.1}", result.average_matches());
}
