use crate::resolver::{is_reserved, resolve_owner};
use crate::rules::{Category, Node, RuleSet};
use crate::utils::parent_dir;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Issue counts of a single package, per category.
///
/// An empty record is valid: the package was walked but nothing in it
/// matched any rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    counts: BTreeMap<Category, usize>,
}

impl PackageRecord {
    /// Occurrences of `category`, `0` if it never matched.
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Sum of every category count.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn has_issues(&self) -> bool {
        self.total() > 0
    }

    /// Categories that matched at least once, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(category, count)| (*category, *count))
    }

    fn increment(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }
}

/// What an issue tracker needs to know about one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    pub package: String,
    pub total: usize,
    pub categories: BTreeMap<Category, usize>,
}

/// Per-package issue counts accumulated over one scan.
///
/// The walk driver calls [`PackageStore::visit`] once per filesystem entry.
/// Packages are kept sorted by name so every enumeration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct PackageStore {
    rules: RuleSet,
    packages: BTreeMap<String, PackageRecord>,
}

impl PackageStore {
    /// Creates an empty store checking the core categories only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store checking the categories of `rules`.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            packages: BTreeMap::new(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Attributes `node` to its owning package and counts every category it
    /// falls into.
    ///
    /// A traversal error is handed back untouched and leaves the store as it
    /// was. Entries whose owner is the scan root or the `.bin` shim directory
    /// are ignored.
    pub fn visit<E>(&mut self, node: Result<Node<'_>, E>) -> Result<(), E> {
        let node = node?;

        let owner = resolve_owner(parent_dir(node.path));
        if is_reserved(owner) {
            debug!(path = node.path, "skipping entry without package");
            return Ok(());
        }

        debug!(path = node.path, package = owner, "attributed entry");
        let rules = &self.rules;
        let record = self.packages.entry(owner.to_string()).or_default();
        for category in rules.classify(node) {
            debug!(path = node.path, package = owner, %category, "issue");
            record.increment(category);
        }
        Ok(())
    }

    /// Records one occurrence of `category` for `package`, creating its record
    /// if needed. Reserved names are ignored.
    pub fn append_error(&mut self, package: &str, category: Category) {
        if is_reserved(package) {
            return;
        }
        self.packages
            .entry(package.to_string())
            .or_default()
            .increment(category);
    }

    pub fn get(&self, package: &str) -> Option<&PackageRecord> {
        self.packages.get(package)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// Occurrences of `category` in `package`, `0` for unknown packages.
    pub fn count(&self, package: &str, category: Category) -> usize {
        self.get(package).map_or(0, |record| record.count(category))
    }

    /// Total number of issues of `package`, `0` for unknown packages.
    pub fn total_errors(&self, package: &str) -> usize {
        self.get(package).map_or(0, PackageRecord::total)
    }

    /// Every package seen during the scan, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageRecord)> + '_ {
        self.packages
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Packages with at least one issue, sorted by name.
    pub fn with_issues(&self) -> impl Iterator<Item = (&str, &PackageRecord)> + '_ {
        self.iter().filter(|(_, record)| record.has_issues())
    }

    /// Number of packages seen, with or without issues.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Number of packages with at least one issue.
    pub fn packages_with_errors(&self) -> usize {
        self.with_issues().count()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// One summary per package with issues, sorted by package name.
    pub fn summaries(&self) -> Vec<IssueSummary> {
        self.with_issues()
            .map(|(name, record)| IssueSummary {
                package: name.to_string(),
                total: record.total(),
                categories: record.iter().collect(),
            })
            .collect()
    }
}
