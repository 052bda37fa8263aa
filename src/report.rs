use crate::rules::Category;
use crate::store::{IssueSummary, PackageStore};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Cells wider than this are truncated in the table.
pub const MAX_COL_WIDTH: usize = 50;

/// Holds the outcome of a scan.
/// This struct is serialized to JSON if requested.
#[derive(Debug, Clone, Serialize)]
pub struct BlameReport {
    /// Directory the scan started from.
    pub root: PathBuf,
    /// Categories that were checked, in column order.
    pub categories: Vec<Category>,
    /// Number of packages with at least one issue.
    pub packages_with_errors: usize,
    /// Number of packages seen during the scan.
    pub total_packages: usize,
    /// Per-package summaries, sorted by package name.
    pub packages: Vec<IssueSummary>,
}

impl BlameReport {
    /// Builds the report of a finished scan. Packages without issues are only
    /// listed when `include_clean` is set.
    pub fn from_store(root: &Path, store: &PackageStore, include_clean: bool) -> Self {
        let packages = if include_clean {
            store
                .iter()
                .map(|(name, record)| IssueSummary {
                    package: name.to_string(),
                    total: record.total(),
                    categories: record.iter().collect(),
                })
                .collect()
        } else {
            store.summaries()
        };

        Self {
            root: root.to_path_buf(),
            categories: store.rules().categories().to_vec(),
            packages_with_errors: store.packages_with_errors(),
            total_packages: store.package_count(),
            packages,
        }
    }

    /// One-line summary printed above the table.
    pub fn headline(&self) -> String {
        format!(
            "Your node_modules contains {} packages with errors out of {} packages",
            self.packages_with_errors, self.total_packages
        )
    }

    /// Renders the headline followed by an aligned table, one row per package.
    pub fn render(&self) -> String {
        let mut header = vec!["PACKAGE".to_string(), "ERRORS".to_string()];
        header.extend(self.categories.iter().map(|c| c.column().to_string()));

        let rows: Vec<Vec<String>> = self
            .packages
            .iter()
            .map(|summary| {
                let mut row = vec![truncate(&summary.package), summary.total.to_string()];
                row.extend(self.categories.iter().map(|category| {
                    summary
                        .categories
                        .get(category)
                        .copied()
                        .unwrap_or(0)
                        .to_string()
                }));
                row
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                rows.iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(header[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = format!("{}\n\n", self.headline());
        out.push_str(&format_row(&header, &widths, true));
        for row in &rows {
            out.push_str(&format_row(row, &widths, false));
        }
        out
    }
}

/// Serializes the reports of one run as a pretty JSON array.
///
/// The array has one element per scanned tree, even for a single tree, so
/// consumers can rely on one schema.
pub fn to_json(reports: &[BlameReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

fn format_row(cells: &[String], widths: &[usize], bold: bool) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = format!("{:<width$}", cell, width = width);
            if bold {
                cell.bold().to_string()
            } else {
                cell
            }
        })
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_COL_WIDTH {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(MAX_COL_WIDTH - 3).collect();
    format!("{}...", kept)
}
