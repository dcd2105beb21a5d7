//! CLI output formatting for a generation run.
//!
//! # Information-First Display
//!
//! Output is a page inventory first and a file listing second. The summary
//! leads with what was generated (per playbook) and how it fared against the
//! quality gates; file paths appear only in the closing lines of a write run.
//!
//! Diagnostics (per-page validation warnings, phase progress) go through
//! `tracing` on stderr. Everything here is the stdout summary.
//!
//! # Output Format
//!
//! ## Write run
//!
//! ```text
//! Generated 13 pages
//!     location     3
//!     persona      3
//!     glossary     3
//!     comparison   2
//!     curation     2
//!
//! Validation
//!     Valid: 2
//!     Warnings: 11
//!
//! Written 13 pages → pages/seo
//! Sitemap: 24 URLs → sitemap.xml
//! Manifest → pseo/generated-pages-manifest.json
//! ```
//!
//! ## Dry run (`--validate`)
//!
//! ```text
//! Generated 13 pages
//!     ...
//!
//! Validation
//!     Valid: 2
//!     Warnings: 11
//!
//! Dry run, no files written
//!     Unique slugs: 13
//!     Unique titles: 13
//!     Unique keywords: 13
//!
//! Validation Issues
//! pg-near-ashok-nagar
//!     Content too short: 4890 chars (min 5000)
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::pipeline::{RunReport, ValidationSummary, WriteSummary};
use crate::validate::ValidationStats;

// ============================================================================
// Shared helpers
// ============================================================================

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Page totals, overall and per playbook.
///
/// ```text
/// Generated 13 pages
///     location     3
///     glossary     3
/// ```
pub fn format_generated(report: &RunReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {}",
        plural(report.total_pages(), "page", "pages")
    )];
    for (playbook, count) in &report.generated {
        lines.push(format!("{}{:<12} {}", indent(1), playbook.as_str(), count));
    }
    lines
}

pub fn format_validation(summary: &ValidationSummary) -> Vec<String> {
    vec![
        "Validation".to_string(),
        format!("{}Valid: {}", indent(1), summary.valid),
        format!("{}Warnings: {}", indent(1), summary.invalid),
    ]
}

/// Distinct-value counts followed by every failing page and its issues.
pub fn format_dry_run(summary: &ValidationSummary) -> Vec<String> {
    let ValidationStats {
        total_slugs,
        total_titles,
        total_keywords,
    } = summary.stats;
    let mut lines = vec![
        "Dry run, no files written".to_string(),
        format!("{}Unique slugs: {total_slugs}", indent(1)),
        format!("{}Unique titles: {total_titles}", indent(1)),
        format!("{}Unique keywords: {total_keywords}", indent(1)),
    ];

    if !summary.failures.is_empty() {
        lines.push(String::new());
        lines.push("Validation Issues".to_string());
        for failure in &summary.failures {
            lines.push(failure.slug.clone());
            for issue in &failure.errors {
                lines.push(format!("{}{issue}", indent(1)));
            }
        }
    }
    lines
}

pub fn format_written(written: &WriteSummary) -> Vec<String> {
    vec![
        format!(
            "Written {} → {}",
            plural(written.pages_written, "page", "pages"),
            written.output_dir.display()
        ),
        format!(
            "Sitemap: {} → {}",
            plural(written.sitemap_urls, "URL", "URLs"),
            written.sitemap_path.display()
        ),
        format!("Manifest → {}", written.manifest_path.display()),
    ]
}

// ============================================================================
// Full run
// ============================================================================

/// The complete summary for a run, sections separated by blank lines.
pub fn format_run_output(report: &RunReport) -> Vec<String> {
    let mut sections = vec![
        format_generated(report),
        format_validation(&report.validation),
    ];
    match &report.written {
        Some(written) => sections.push(format_written(written)),
        None => sections.push(format_dry_run(&report.validation)),
    }

    let mut lines = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(section);
    }
    lines
}

/// Print the run summary to stdout.
pub fn print_run_output(report: &RunReport) {
    for line in format_run_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
