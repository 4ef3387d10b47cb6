//! Word list summary

use crate::core::SecretWord;
use std::collections::BTreeMap;

/// Summary of a word list after length filtering
#[derive(Debug, Clone)]
pub struct WordListSummary {
    pub total: usize,
    pub qualifying: usize,
    pub min_length: usize,
    pub longest: String,
    /// Qualifying word count per length
    pub by_length: BTreeMap<usize, usize>,
    pub sample: Vec<String>,
}

/// Summarize `qualifying` words drawn from a list of `total` entries
#[must_use]
pub fn summarize_words(
    total: usize,
    qualifying: &[SecretWord],
    min_length: usize,
    sample_size: usize,
) -> WordListSummary {
    let mut by_length = BTreeMap::new();
    for word in qualifying {
        *by_length.entry(word.len()).or_insert(0) += 1;
    }

    let longest = qualifying
        .iter()
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.text().cmp(a.text())))
        .map(|w| w.text().to_string())
        .unwrap_or_default();

    WordListSummary {
        total,
        qualifying: qualifying.len(),
        min_length,
        longest,
        by_length,
        sample: qualifying
            .iter()
            .take(sample_size)
            .map(|w| w.text().to_string())
            .collect(),
    }
}
