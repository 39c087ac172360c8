//! Cross-lesson aggregation over an ordered course of lessons.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{CourseError, Result};
use crate::lesson::LessonProfile;
use crate::tokenize::Tokenizer;

/// Word-by-lesson frequency table for a whole course.
///
/// `words` is the row order: union of all lesson words in
/// first-appearance-across-the-course order, restricted to purely
/// alphabetic keys. `lessons` holds the 1-based column labels and
/// `rows[i][j]` is the count of `words[i]` in lesson `j + 1`. The row
/// order is stable across calls for a given course snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyMatrix {
    pub words: Vec<String>,
    pub lessons: Vec<String>,
    pub rows: Vec<Vec<u32>>,
}

/// Ordered collection of lesson profiles with cross-lesson analytics.
///
/// Lesson numbering is 1-based and follows the source order handed to
/// `rebuild`. The aggregator is *Empty* until a rebuild succeeds; query
/// methods on an empty aggregator return empty results, exports fail
/// with `EmptyCourse`.
pub struct CourseAggregator {
    tokenizer: Tokenizer,
    lessons: Vec<LessonProfile>,
}

impl CourseAggregator {
    pub fn new() -> Self {
        CourseAggregator {
            tokenizer: Tokenizer::new(),
            lessons: Vec::new(),
        }
    }

    /// Replaces the lesson list from an ordered list of sources.
    ///
    /// Profiles are built in parallel, one per source, and joined before
    /// any state changes. All-or-nothing: if any source fails to load,
    /// the first error in source order is returned and the previous
    /// lesson list stays in place untouched.
    pub fn rebuild<P>(&mut self, sources: &[P]) -> Result<()>
    where
        P: AsRef<Path> + Sync,
    {
        let built: Vec<Result<LessonProfile>> = sources
            .par_iter()
            .map(|p| LessonProfile::from_file(p.as_ref(), &self.tokenizer))
            .collect();

        let mut lessons = Vec::with_capacity(built.len());
        for profile in built {
            lessons.push(profile?);
        }
        self.lessons = lessons;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Lessons in course order; index + 1 is the lesson number.
    pub fn lessons(&self) -> &[LessonProfile] {
        &self.lessons
    }

    /// For each lesson, the words occurring in no other lesson of the
    /// course.
    ///
    /// Computed from a word -> containing-lesson-count index: a word is
    /// unique to its lesson iff that count is 1. Inner lists are
    /// duplicate-free, in the lesson's first-appearance order. A
    /// single-lesson course returns that lesson's full word set.
    pub fn unique_words_per_lesson(&self) -> Vec<Vec<String>> {
        let mut lesson_count: HashMap<&str, u32> = HashMap::new();
        for lesson in &self.lessons {
            for word in lesson.distinct_in_order() {
                *lesson_count.entry(word).or_insert(0) += 1;
            }
        }

        self.lessons
            .iter()
            .map(|lesson| {
                lesson
                    .distinct_in_order()
                    .iter()
                    .filter(|w| lesson_count[w.as_str()] == 1)
                    .cloned()
                    .collect()
            })
            .collect()
    }

    /// Ascending 1-based lesson numbers whose word set contains `word`.
    pub fn search_word(&self, word: &str) -> Vec<usize> {
        self.lessons
            .iter()
            .enumerate()
            .filter(|(_, lesson)| lesson.contains(word))
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// One `(lesson number, count)` pair per lesson in course order,
    /// count 0 where the word is absent.
    pub fn word_counts(&self, word: &str) -> Vec<(usize, u32)> {
        self.lessons
            .iter()
            .enumerate()
            .map(|(i, lesson)| (i + 1, lesson.count(word)))
            .collect()
    }

    /// Builds the word-by-lesson frequency matrix for the whole course.
    ///
    /// Rows whose word key is not purely alphabetic are dropped (stray
    /// alphanumeric tokens survive the noise pattern but are not words).
    pub fn combined_frequency_matrix(&self) -> Result<FrequencyMatrix> {
        if self.lessons.is_empty() {
            return Err(CourseError::EmptyCourse);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut words: Vec<String> = Vec::new();
        for lesson in &self.lessons {
            for word in lesson.distinct_in_order() {
                if word.chars().all(char::is_alphabetic) && seen.insert(word.as_str()) {
                    words.push(word.clone());
                }
            }
        }

        let rows = words
            .iter()
            .map(|word| self.lessons.iter().map(|l| l.count(word)).collect())
            .collect();

        Ok(FrequencyMatrix {
            words,
            lessons: (1..=self.lessons.len()).map(|i| i.to_string()).collect(),
            rows,
        })
    }
}

impl Default for CourseAggregator {
    fn default() -> Self {
        Self::new()
    }
}
