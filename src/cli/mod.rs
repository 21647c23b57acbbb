//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use revue::models::CommitContext;

/// Print the pre-review header to stderr.
///
/// Names the commit being reviewed and how much work is ahead; with
/// `verbose` the changed file paths are listed as well.
pub fn print_run_header(commit: &CommitContext, requests: usize, verbose: bool) {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(
        handle,
        "  {} {}",
        revue::constants::APP_NAME.bold(),
        format!(
            "· reviewing \"{}\" ({} changed file(s), {} request(s))",
            commit.title,
            commit.changed_files.len(),
            requests,
        )
        .dimmed(),
    );
    if verbose {
        for file in &commit.changed_files {
            let _ = writeln!(handle, "    {}", file.dimmed());
        }
    }
    let _ = writeln!(handle);
    let _ = handle.flush();
}
