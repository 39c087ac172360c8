#![forbid(unsafe_code)]
//! # Course word-frequency analysis
//!
//! Computes word-frequency statistics across a fixed collection of
//! lesson texts (a "course") in a target language, filtering noise
//! tokens (URLs, numerals, Cyrillic words, underscore runs, single
//! letters, stopwords), and derives cross-lesson analytics:
//!
//! - per-lesson frequency rankings,
//! - per-lesson sets of words unique to that lesson within the course,
//! - a unified word-by-lesson frequency matrix,
//! - per-word lookups and an append-only per-word text report.
//!
//! The library half builds the statistics; the binary wires it to
//! CSV/TSV/JSON sheet exports and a terminal histogram.

pub mod course;
pub mod error;
pub mod export;
pub mod lesson;
pub mod stopwords;
pub mod tokenize;

pub use course::{CourseAggregator, FrequencyMatrix};
pub use error::{CourseError, Result};
pub use export::{
    ExportFormat, append_word_report, render_histogram, write_ranked_sheet,
    write_statistics_sheet, write_unique_sheet,
};
pub use lesson::LessonProfile;
pub use tokenize::Tokenizer;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collects `.txt` lesson files under `path`, sorted by path so the
/// course order is stable. A file path is returned as-is.
pub fn collect_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("txt"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}
