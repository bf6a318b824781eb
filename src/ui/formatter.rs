//! Pure formatting functions for UI output.
//!
//! `format_*` functions build plain strings and are what the tests exercise.
//! `display_*` functions add color and print.

use comfy_table::Table;
use console::style;

use crate::cli::DeletionResult;
use crate::domain::BranchRecord;

pub const TABLE_HEADER: [&str; 4] = ["Branch Name", "Last Commit", "Author", "Committer"];

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Message for a run that found nothing old enough.
pub fn format_no_stale_branches(days: u32) -> String {
    let plural = if days == 1 { "" } else { "S" };
    format!("THERE ARE NO BRANCHES OLDER THAN {} DAY{}", days, plural)
}

pub fn display_no_stale_branches(days: u32) {
    println!("{}", style(format_no_stale_branches(days)).red());
}

/// Render stale branches as a table, oldest commit first.
pub fn format_stale_table(records: &[BranchRecord]) -> String {
    let mut sorted: Vec<&BranchRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.last_commit_timestamp);

    let mut table = Table::new();
    table.set_header(TABLE_HEADER.to_vec());
    for record in sorted {
        table.add_row(vec![
            record.name.as_str(),
            record.last_commit_relative.as_str(),
            record.author_name.as_str(),
            record.committer_name.as_str(),
        ]);
    }
    table.to_string()
}

pub fn display_stale_table(records: &[BranchRecord]) {
    println!("{}", format_stale_table(records));
}

pub fn display_deletion_banner() {
    println!(
        "{} {} {}",
        style("###").yellow(),
        style("START OF DELETING REMOTE BRANCHES").red(),
        style("###").yellow()
    );
}

/// One log line for a deletion attempt, followed by the tool's raw output.
pub fn format_deletion_result(result: &DeletionResult) -> String {
    let status = if result.success() {
        "deleted".to_string()
    } else {
        format!("failed (exit code {})", result.exit_code)
    };

    match result.output.as_deref().map(str::trim_end) {
        Some(output) if !output.is_empty() => {
            format!("{}: {}\n{}", result.branch_name, status, output)
        }
        _ => format!("{}: {}", result.branch_name, status),
    }
}

pub fn display_deletion_result(result: &DeletionResult) {
    let line = format_deletion_result(result);
    if result.success() {
        println!("{} {}", style("✓").green(), line);
    } else {
        println!("{} {}", style("✗").red(), line);
    }
}

pub fn format_deletion_summary(results: &[DeletionResult]) -> String {
    let deleted = results.iter().filter(|result| result.success()).count();
    format!("Deleted {} of {} branches", deleted, results.len())
}

/// Diagnostic printed when a precondition stage aborts the run.
pub fn format_abort(exit_code: i32) -> String {
    format!("script executed with code: {}", exit_code)
}

pub fn display_abort(exit_code: i32) {
    println!("{}", format_abort(exit_code));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, timestamp: i64, relative: &str) -> BranchRecord {
        BranchRecord {
            name: name.to_string(),
            last_commit_timestamp: timestamp,
            last_commit_relative: relative.to_string(),
            author_name: "Grace Hopper".to_string(),
            committer_name: "Alan Turing".to_string(),
        }
    }

    #[test]
    fn test_no_stale_branches_plural() {
        assert_eq!(
            format_no_stale_branches(90),
            "THERE ARE NO BRANCHES OLDER THAN 90 DAYS"
        );
        assert_eq!(
            format_no_stale_branches(1),
            "THERE ARE NO BRANCHES OLDER THAN 1 DAY"
        );
    }

    #[test]
    fn test_stale_table_has_header_and_rows() {
        let table = format_stale_table(&[record("origin/feature-a", 10, "7 months ago")]);
        for column in TABLE_HEADER {
            assert!(table.contains(column), "missing column {}", column);
        }
        assert!(table.contains("origin/feature-a"));
        assert!(table.contains("7 months ago"));
        assert!(table.contains("Grace Hopper"));
        assert!(table.contains("Alan Turing"));
    }

    #[test]
    fn test_stale_table_sorted_oldest_first() {
        let table = format_stale_table(&[
            record("origin/newer", 200, "1 year ago"),
            record("origin/older", 100, "2 years ago"),
        ]);
        let older = table.find("origin/older").unwrap();
        let newer = table.find("origin/newer").unwrap();
        assert!(older < newer);
    }

    #[test]
    fn test_deletion_result_with_output() {
        let result = DeletionResult {
            branch_name: "origin/feature-a".to_string(),
            exit_code: 0,
            output: Some("-\t:refs/heads/feature-a\t[deleted]\nDone\n".to_string()),
        };
        let line = format_deletion_result(&result);
        assert!(line.starts_with("origin/feature-a: deleted\n"));
        assert!(line.ends_with("Done"));
    }

    #[test]
    fn test_deletion_result_failure_without_output() {
        let result = DeletionResult {
            branch_name: "origin/gone".to_string(),
            exit_code: 1,
            output: None,
        };
        assert_eq!(
            format_deletion_result(&result),
            "origin/gone: failed (exit code 1)"
        );
    }

    #[test]
    fn test_deletion_summary_counts_successes() {
        let results = vec![
            DeletionResult {
                branch_name: "origin/a".to_string(),
                exit_code: 0,
                output: None,
            },
            DeletionResult {
                branch_name: "origin/b".to_string(),
                exit_code: 1,
                output: None,
            },
        ];
        assert_eq!(format_deletion_summary(&results), "Deleted 1 of 2 branches");
    }

    #[test]
    fn test_abort_message() {
        assert_eq!(format_abort(128), "script executed with code: 128");
    }
}
