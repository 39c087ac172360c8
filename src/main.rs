#![forbid(unsafe_code)]
//! # Course Analysis CLI
//!
//! Command-line interface for the `course_analysis` crate. Point it at
//! the lesson files of one course (in course order) or at a directory of
//! `.txt` lessons, and it writes the ranked-word, unique-word and full
//! statistics sheets, answers per-word queries, and renders frequency
//! histograms.
//!
//! ## Example
//! ```bash
//! cargo run --release -- lessons/ --export-format csv --search gato --hist 10
//! ```
//!
//! See `--help` for all available options.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use course_analysis::{
    CourseAggregator, CourseError, ExportFormat, append_word_report, collect_files,
    render_histogram, write_ranked_sheet, write_statistics_sheet, write_unique_sheet,
};
use log::{error, warn};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Lesson files in course order, or a single directory of .txt lessons
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Directory for exported sheets and reports
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output format for the sheet exports (csv, tsv, json)
    #[arg(long, default_value = "csv")]
    export_format: ExportFormat,

    /// Print the lesson numbers containing WORD (repeatable)
    #[arg(long, value_name = "WORD")]
    search: Vec<String>,

    /// Append WORD's per-lesson counts to word_statistic.txt (repeatable)
    #[arg(long, value_name = "WORD")]
    report: Vec<String>,

    /// Print a top-N frequency histogram for every lesson
    #[arg(long, value_name = "N")]
    hist: Option<usize>,

    /// Skip the three sheet exports (query-only run)
    #[arg(long, default_value_t = false)]
    no_sheets: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // A single directory argument means "all .txt lessons under it,
    // path-sorted"; anything else is an explicit ordered file list.
    let sources: Vec<PathBuf> = if cli.paths.len() == 1 && cli.paths[0].is_dir() {
        collect_files(&cli.paths[0])
    } else {
        cli.paths.clone()
    };

    let mut course = CourseAggregator::new();
    if let Err(e) = course.rebuild(&sources) {
        error!("Error: {}", e);
        process::exit(1);
    }
    if course.is_empty() {
        warn!("no lesson sources found; nothing to analyze");
        return;
    }

    if !cli.no_sheets {
        let sheets = [
            write_ranked_sheet(&course, &cli.out_dir, cli.export_format),
            write_unique_sheet(&course, &cli.out_dir, cli.export_format),
            write_statistics_sheet(&course, &cli.out_dir, cli.export_format),
        ];
        for sheet in sheets {
            match sheet {
                Ok(path) => println!("Wrote {}", path.display()),
                Err(CourseError::EmptyCourse) => warn!("{}", CourseError::EmptyCourse),
                Err(e) => {
                    error!("Export error: {}", e);
                    process::exit(1);
                }
            }
        }
    }

    for word in &cli.search {
        let lessons = course.search_word(word);
        if lessons.is_empty() {
            println!("{word}: not found in any lesson");
        } else {
            let numbers: Vec<String> = lessons.iter().map(usize::to_string).collect();
            println!("{word}: lessons {}", numbers.join(", "));
        }
    }

    if !cli.report.is_empty() {
        let report_path = cli.out_dir.join("word_statistic.txt");
        for word in &cli.report {
            if let Err(e) = append_word_report(&course, word, &report_path) {
                error!("Report error: {}", e);
                process::exit(1);
            }
        }
        println!("Wrote {}", report_path.display());
    }

    if let Some(n) = cli.hist {
        for lesson in course.lessons() {
            println!("{}", render_histogram(lesson, n));
        }
    }
}
