// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the `Blamer` scanner.
/// It walks a dependency tree and feeds every entry to a `PackageStore`.
pub mod analyzer;

/// Module mapping a path inside a dependency tree to its owning package.
/// Nested `node_modules` directories are attributed to the deepest package.
pub mod resolver;

/// Module defining the issue categories and the rules detecting them.
pub mod rules;

/// Module accumulating per-package issue counts.
/// This includes `PackageStore`, `PackageRecord` and `IssueSummary`.
pub mod store;

/// Module rendering a finished scan as a table or JSON.
pub mod report;

/// Module setting up `tracing` output for the binary.
pub mod logging;

/// Module containing path helpers shared by the other modules.
pub mod utils;
