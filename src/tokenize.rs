//! Text-to-token pipeline for a single lesson.
//!
//! Raw lesson text passes through a fixed cleaning sequence: URL
//! stripping, lowercasing, `\w+` tokenization, then an exclusion set
//! built from noise patterns (digit runs, Cyrillic words, underscore
//! runs) plus the fixed stopword lists and single letters.

use std::collections::HashSet;

use regex::Regex;

use crate::stopwords;

/// Owns the compiled cleaning patterns and the fixed exclusion entries.
/// Construct once and reuse across lessons; `tokenize` is `&self` and
/// thread-safe.
pub struct Tokenizer {
    url: Regex,
    noise: Regex,
    underscores: Regex,
    word: Regex,
    fixed_exclusions: HashSet<String>,
}

impl Tokenizer {
    pub fn new() -> Self {
        let fixed_exclusions = stopwords::SPANISH
            .iter()
            .chain(stopwords::RUSSIAN.iter())
            .map(|w| (*w).to_string())
            .chain(single_letters())
            .collect();

        Tokenizer {
            url: Regex::new(
                r"(http|ftp|https)://([\w\-_]+(?:(?:\.[\w\-_]+)+))([\w\-.,@?^=%&:/~+#]*[\w\-@?^=%&/~+#])?",
            )
            .expect("valid url pattern"),
            // Anchored at token start: a token is noise if it begins
            // with digits or Cyrillic letters, even when the rest is a
            // genuine word.
            noise: Regex::new(r"^(?:[1-9]+|[а-яА-Я]+)").expect("valid noise pattern"),
            underscores: Regex::new(r"^_{1,40}$").expect("valid underscore pattern"),
            word: Regex::new(r"\w+").expect("valid word pattern"),
            fixed_exclusions,
        }
    }

    /// Cleans `raw` into the ordered token sequence for one lesson.
    /// Duplicates and first-appearance order are preserved; excluded
    /// tokens are dropped entirely.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        let stripped = self.url.replace_all(raw, "");
        let lowered = stripped.to_lowercase();

        let tokens: Vec<&str> = self.word.find_iter(&lowered).map(|m| m.as_str()).collect();

        let mut excluded: HashSet<&str> = HashSet::new();
        for &token in &tokens {
            if self.noise.is_match(token) || self.underscores.is_match(token) {
                excluded.insert(token);
            }
        }

        tokens
            .into_iter()
            .filter(|t| !excluded.contains(t) && !self.fixed_exclusions.contains(*t))
            .map(String::from)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn single_letters() -> impl Iterator<Item = String> {
    ('a'..='z').chain(std::iter::once('ñ')).map(String::from)
}
