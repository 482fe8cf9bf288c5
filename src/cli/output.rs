use colored::*;

use crate::cleaner::Report;
use crate::common::format::{self, format_path, format_size, format_size_colored};

/// Maximum number of failures listed before the rest are summarized
const MAX_LISTED_ERRORS: usize = 10;

/// Print a run report in human-readable format. `elapsed_secs` is the
/// wall-clock time of the run as measured by the caller.
pub fn print_report(report: &Report, detailed: bool, elapsed_secs: f64) {
    println!();
    println!(
        "{}  CleanTMP — {}",
        "🧹",
        format_path(&report.root).bold()
    );
    println!("{}", "─".repeat(60).dimmed());

    let mode = if report.dry_run { "Dry run" } else { "Cleaned" };
    println!(
        "  {} in {}  •  {} freed",
        mode.bold(),
        format::format_duration(elapsed_secs).cyan(),
        format_size_colored(report.bytes_freed),
    );
    println!("{}", "─".repeat(60).dimmed());

    if report.recursive {
        print_row("Folders examined", report.dirs_examined, false);
        if !report.dirs_protected.is_empty() {
            print_row("Folders protected", report.dirs_protected.len(), false);
        }
        if !report.dirs_unreadable.is_empty() {
            print_row("Folders inaccessible", report.dirs_unreadable.len(), true);
        }
    }

    print_row("Files examined", report.files_examined, false);
    if report.dry_run {
        print_row("Files to delete", report.would_delete.len(), false);
    } else {
        print_row("Files deleted", report.deleted_count(), false);
    }
    if report.skipped_count() > 0 {
        print_row("Files skipped", report.skipped_count(), false);
    }
    if report.failed_count() > 0 {
        print_row("Files inaccessible", report.failed_count(), true);
    }

    if detailed {
        let listed = if report.dry_run {
            &report.would_delete
        } else {
            &report.deleted
        };
        if !listed.is_empty() {
            println!();
            for path in listed {
                println!(
                    "    {} {}",
                    "✓".green(),
                    format::truncate_left(&format_path(path), 72).dimmed()
                );
            }
        }
    }

    let errors: Vec<_> = report
        .failures
        .iter()
        .chain(report.dirs_unreadable.iter())
        .collect();
    if !errors.is_empty() {
        println!();
        println!("  {} {} errors:", "⚠".yellow(), errors.len());
        for (i, failure) in errors.iter().enumerate().take(MAX_LISTED_ERRORS) {
            println!(
                "    {} {}: {}",
                format!("{}.", i + 1).dimmed(),
                format_path(&failure.path),
                failure.reason.dimmed()
            );
        }
        if errors.len() > MAX_LISTED_ERRORS {
            println!(
                "    ... and {} more",
                (errors.len() - MAX_LISTED_ERRORS).to_string().dimmed()
            );
        }
    }

    if report.cancelled {
        println!();
        println!("  {} Stopped early, report is partial", "✗".red());
    } else if report.matched_count() == 0 {
        println!();
        println!("  {} Nothing to clean!", "✨");
    }
    println!();
}

fn print_row(label: &str, value: usize, warn: bool) {
    let value = if warn {
        value.to_string().yellow()
    } else {
        value.to_string().cyan()
    };
    println!("  {:<22}: {}", label, value);
}

/// Print the report as JSON
pub fn print_report_json(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}

/// Print a minimal summary: examined, deleted, failed, freed
pub fn print_report_quiet(report: &Report) {
    let removed = if report.dry_run {
        report.would_delete.len()
    } else {
        report.deleted_count()
    };
    println!(
        "{}  {}  {}  {}",
        report.files_examined,
        removed,
        report.failed_count(),
        format_size(report.bytes_freed)
    );
}
