//! Formatting utilities for terminal output

use crate::solver::ScoredWord;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render scored words as `word (score)` entries, one row of up to `per_row`
#[must_use]
pub fn scored_rows(words: &[ScoredWord<'_>], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{} ({})", w.word, w.score))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Lay out plain words in columns padded to the longest word
#[must_use]
pub fn word_columns(words: &[&str], columns: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// "1 word" / "3 words"
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
