//! Per-lesson word statistics.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{CourseError, Result};
use crate::tokenize::Tokenizer;

/// Word statistics for a single lesson text.
///
/// Immutable after construction: the token sequence is cleaned once and
/// every accessor is a pure function of it. The distinct-word order
/// (first appearance in the source text) is kept explicitly because it
/// is the tie-break for all frequency rankings.
#[derive(Debug, Clone)]
pub struct LessonProfile {
    source_id: String,
    tokens: Vec<String>,
    frequency: HashMap<String, u32>,
    distinct: Vec<String>,
}

impl LessonProfile {
    /// Builds a profile from a lesson file. The file's basename becomes
    /// the `source_id` used as a column label downstream.
    ///
    /// A source that cannot be read fails with `NotFound`; no partial
    /// profile is produced.
    pub fn from_file(path: &Path, tokenizer: &Tokenizer) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CourseError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let source_id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_text(source_id, &raw, tokenizer))
    }

    /// Builds a profile from already-resolved text.
    pub fn from_text(source_id: impl Into<String>, raw: &str, tokenizer: &Tokenizer) -> Self {
        let tokens = tokenizer.tokenize(raw);
        let mut frequency: HashMap<String, u32> = HashMap::new();
        let mut distinct = Vec::new();
        for token in &tokens {
            let count = frequency.entry(token.clone()).or_insert(0);
            if *count == 0 {
                distinct.push(token.clone());
            }
            *count += 1;
        }
        LessonProfile {
            source_id: source_id.into(),
            tokens,
            frequency,
            distinct,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Cleaned ordered tokens, duplicates preserved.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Distinct cleaned tokens as a set.
    pub fn words(&self) -> HashSet<&str> {
        self.distinct.iter().map(String::as_str).collect()
    }

    /// Distinct tokens in first-appearance order.
    pub fn distinct_in_order(&self) -> &[String] {
        &self.distinct
    }

    /// Counts per distinct token, no implied order.
    pub fn frequency_table(&self) -> &HashMap<String, u32> {
        &self.frequency
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequency.contains_key(word)
    }

    /// Occurrences of `word` in this lesson, 0 if absent.
    pub fn count(&self, word: &str) -> u32 {
        self.frequency.get(word).copied().unwrap_or(0)
    }

    /// All distinct words by descending frequency. Ties keep
    /// first-appearance order (stable sort over `distinct`), so the
    /// ranking is identical across runs for identical input text.
    pub fn ranked_words(&self) -> Vec<&str> {
        let mut ranked: Vec<&str> = self.distinct.iter().map(String::as_str).collect();
        ranked.sort_by_key(|w| Reverse(self.frequency[*w]));
        ranked
    }

    /// Top `n` of the ranking with counts. `n` past the distinct word
    /// count returns every word.
    pub fn top_words(&self, n: usize) -> Vec<(&str, u32)> {
        self.ranked_words()
            .into_iter()
            .take(n)
            .map(|w| (w, self.frequency[w]))
            .collect()
    }
}
