//! Export collaborators: tabular sheets, per-word text report and the
//! terminal histogram.
//!
//! The aggregator supplies the data; everything here only renders it.
//! Sheet writers return the written path so the CLI can report it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;

use crate::course::CourseAggregator;
use crate::error::{CourseError, Result};
use crate::lesson::LessonProfile;

/// Output format for the sheet exports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    fn delimiter(self) -> u8 {
        match self {
            ExportFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

#[derive(Serialize)]
struct Column<'a> {
    lesson: &'a str,
    words: &'a [String],
}

/// One column per lesson, header = source id, rows = that lesson's words
/// ranked by descending frequency. Writes `lessons.{ext}`.
pub fn write_ranked_sheet(
    course: &CourseAggregator,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf> {
    let columns: Vec<(String, Vec<String>)> = course
        .lessons()
        .iter()
        .map(|lesson| {
            (
                lesson.source_id().to_string(),
                lesson.ranked_words().iter().map(|w| w.to_string()).collect(),
            )
        })
        .collect();
    write_columns(course, dir, "lessons", format, &columns)
}

/// One column per lesson, rows = words unique to that lesson within the
/// course. Writes `unique_lessons.{ext}`.
pub fn write_unique_sheet(
    course: &CourseAggregator,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf> {
    let unique = course.unique_words_per_lesson();
    let columns: Vec<(String, Vec<String>)> = course
        .lessons()
        .iter()
        .zip(unique)
        .map(|(lesson, words)| (lesson.source_id().to_string(), words))
        .collect();
    write_columns(course, dir, "unique_lessons", format, &columns)
}

/// Full word-by-lesson count table: one row per alphabetic word, one
/// numeric column per lesson. Writes `full_statistics.{ext}`.
pub fn write_statistics_sheet(
    course: &CourseAggregator,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf> {
    let matrix = course.combined_frequency_matrix()?;
    let path = dir.join(format!("full_statistics.{}", format.extension()));

    match format {
        ExportFormat::Json => {
            let file = std::fs::File::create(&path)?;
            serde_json::to_writer_pretty(file, &matrix)?;
        }
        _ => {
            let mut writer = WriterBuilder::new()
                .delimiter(format.delimiter())
                .from_path(&path)?;
            let mut header = vec!["word".to_string()];
            header.extend(matrix.lessons.iter().cloned());
            writer.write_record(&header)?;
            for (word, row) in matrix.words.iter().zip(&matrix.rows) {
                let mut record = vec![word.clone()];
                record.extend(row.iter().map(u32::to_string));
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }
    }
    Ok(path)
}

/// Appends one block for `word` to the report file:
/// a `Word <word>` header, one `Lesson <n>: <count>` line per lesson,
/// then a blank line.
pub fn append_word_report(course: &CourseAggregator, word: &str, path: &Path) -> Result<()> {
    if course.is_empty() {
        return Err(CourseError::EmptyCourse);
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Word {word}")?;
    for (lesson, count) in course.word_counts(word) {
        writeln!(file, "Lesson {lesson}: {count}")?;
    }
    writeln!(file)?;
    Ok(())
}

/// Renders the lesson's top-`n` words as a text bar chart, one line per
/// word, bars scaled to the highest count.
pub fn render_histogram(lesson: &LessonProfile, n: usize) -> String {
    const MAX_BAR: usize = 40;

    let top = lesson.top_words(n);
    let Some(&(_, max_count)) = top.first() else {
        return format!("{}: no words\n", lesson.source_id());
    };
    let width = top.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);

    let mut out = format!("{} (top {})\n", lesson.source_id(), top.len());
    for (word, count) in top {
        let bar = (count as usize * MAX_BAR).div_ceil(max_count as usize);
        out.push_str(&format!(
            "{word:<width$} {} {count}\n",
            "#".repeat(bar)
        ));
    }
    out
}

fn write_columns(
    course: &CourseAggregator,
    dir: &Path,
    stem: &str,
    format: ExportFormat,
    columns: &[(String, Vec<String>)],
) -> Result<PathBuf> {
    if course.is_empty() {
        return Err(CourseError::EmptyCourse);
    }
    let path = dir.join(format!("{stem}.{}", format.extension()));

    match format {
        ExportFormat::Json => {
            let records: Vec<Column> = columns
                .iter()
                .map(|(lesson, words)| Column {
                    lesson: lesson.as_str(),
                    words: words.as_slice(),
                })
                .collect();
            let file = std::fs::File::create(&path)?;
            serde_json::to_writer_pretty(file, &records)?;
        }
        _ => {
            let mut writer = WriterBuilder::new()
                .delimiter(format.delimiter())
                .from_path(&path)?;
            let header: Vec<&str> = columns.iter().map(|(label, _)| label.as_str()).collect();
            writer.write_record(&header)?;

            // Shorter columns are padded with empty cells.
            let height = columns.iter().map(|(_, col)| col.len()).max().unwrap_or(0);
            for row in 0..height {
                let record: Vec<&str> = columns
                    .iter()
                    .map(|(_, col)| col.get(row).map(String::as_str).unwrap_or(""))
                    .collect();
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::Tokenizer;

    fn lesson(text: &str) -> LessonProfile {
        LessonProfile::from_text("1.txt", text, &Tokenizer::new())
    }

    #[test]
    fn histogram_lists_words_with_counts() {
        let rendered = render_histogram(&lesson("gato gato gato perro"), 5);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "1.txt (top 2)");
        assert!(lines[1].starts_with("gato"));
        assert!(lines[1].ends_with(" 3"));
        assert!(lines[2].starts_with("perro"));
        assert!(lines[2].ends_with(" 1"));
    }

    #[test]
    fn histogram_bars_scale_to_max() {
        let rendered = render_histogram(&lesson("gato gato perro"), 5);
        let bar_len = |line: &str| line.chars().filter(|c| *c == '#').count();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(bar_len(lines[1]), 40);
        assert_eq!(bar_len(lines[2]), 20);
    }

    #[test]
    fn empty_lesson_histogram_is_harmless() {
        let rendered = render_histogram(&lesson(""), 5);
        assert!(rendered.contains("no words"));
    }
}
