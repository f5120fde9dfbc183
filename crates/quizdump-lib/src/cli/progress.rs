//! Spinner, progress bar and summary output for dump runs.

use crate::download::SyncReport;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use std::time::Duration;

const SEPARATOR: &str = "────────────────────────────────────────────────────────────";

/// Creates the spinner shown while the manifest is fetched and saved.
pub fn make_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Creates the media progress bar. Its length is the total byte size of the selection.
pub fn make_sync_progress_bar(total_size: u64) -> ProgressBar {
    let bar = ProgressBar::new(total_size);
    bar.set_style(
        ProgressStyle::with_template(
            "[{bar:40.blue}] {percent}% | {eta:.magenta} | {bytes}/{total_bytes}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> "),
    );
    bar
}

/// Prints a summary of what the media sync did.
pub fn print_summary(report: &SyncReport) {
    println!("\n{SEPARATOR}");
    println!("Media Summary");
    println!("{SEPARATOR}");
    println!("  Files downloaded:  {}", report.downloaded);
    println!("  Bytes downloaded:  {}", HumanBytes(report.bytes_downloaded));
    println!("  Files skipped:     {}", report.skipped);
    if report.replaced > 0 {
        println!("  Files replaced:    {}", report.replaced);
    }
    println!("{SEPARATOR}");
}
