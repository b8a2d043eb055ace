use std::cmp::Ordering;

use ahash::RandomState;
use hashbrown::HashMap;
use serde::Serialize;

use crate::normalize::{normalize, words};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordFreq {
    pub word: String,
    pub count: u64,
}

impl WordFreq {
    pub fn as_pair(&self) -> (&str, u64) {
        (self.word.as_str(), self.count)
    }

    /// Most frequent first; alphabetical among equal counts.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Word -> occurrence count.
#[derive(Clone, Debug, Default)]
pub struct WordCounts {
    map: HashMap<String, u64, RandomState>,
    total: u64,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut counts = Self::new();
        counts.add_text(text);
        counts
    }

    pub fn add_text(&mut self, text: &str) {
        let normalized = normalize(text);
        for w in words(&normalized) {
            self.add_word(w);
        }
        log::debug!("counted {} words, {} distinct", self.total, self.map.len());
    }

    /// Counts `word` as-is; callers pass already-normalized words.
    pub fn add_word(&mut self, word: &str) {
        *self.map.entry_ref(word).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, word: &str) -> u64 {
        self.map.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of words counted, duplicates included.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Every entry, ordered by descending count then ascending word.
    pub fn ranked(&self) -> Vec<WordFreq> {
        let mut out: Vec<WordFreq> = self
            .map
            .iter()
            .map(|(word, &count)| WordFreq {
                word: word.clone(),
                count,
            })
            .collect();
        out.sort_by(WordFreq::rank_cmp);
        out
    }

    /// The first `n` ranked entries. `n <= 0` yields nothing.
    pub fn top(&self, n: i64) -> Vec<WordFreq> {
        if n <= 0 {
            return Vec::new();
        }
        let mut ranked = self.ranked();
        ranked.truncate(usize::try_from(n).unwrap_or(usize::MAX));
        ranked
    }
}

/// The `n` most frequent words of `text`.
pub fn top_words(text: &str, n: i64) -> Vec<WordFreq> {
    WordCounts::from_text(text).top(n)
}
