//! Summary report assembly — renders the engine's final counters into the
//! tabular report shown on stdout or written to the analysis output file.

use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use dirsift_core::model::{format_count, format_size, ScanResult};

/// Render the full report: the summary table followed by the elapsed
/// scan duration.
pub fn render(result: &ScanResult) -> String {
    format!("{}\nScan took {:.2?}", summary_table(result), result.duration)
}

/// One row per configured category, then `Other`, then the Big Files /
/// Errors / Totals rows, separated by blank spacer rows.
fn summary_table(result: &ScanResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Media type", "Files found", "Size"]);

    for category in &result.categories {
        table.add_row([
            category.name.to_string(),
            format_count(category.files_found),
            format_size(category.bytes_found),
        ]);
    }
    table.add_row([
        result.other.name.to_string(),
        format_count(result.other.files_found),
        format_size(result.other.bytes_found),
    ]);

    table.add_row(["", "", ""]);
    table.add_row([
        format!(
            "Big Files (> {})",
            format_size(result.oversized.threshold.bytes())
        ),
        format_count(result.oversized.files_found),
        format_size(result.oversized.bytes_found),
    ]);

    table.add_row(["", "", ""]);
    table.add_row([
        "Errors".to_string(),
        format_count(result.error_count),
        "n/a".to_string(),
    ]);

    table.add_row(["", "", ""]);
    table.add_row([
        result.totals.name.to_string(),
        format_count(result.totals.files_found),
        format_size(result.totals.bytes_found),
    ]);

    table
}
