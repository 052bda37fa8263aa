// Rules module
// Each rule tags a visited filesystem entry with one issue category.

use serde::Serialize;
use std::fmt;

/// Rules matching on permission bits.
pub mod permissions;

/// Rules matching on well-known file and directory names anywhere in the path.
pub mod artifacts;

/// Rules matching on the file extension.
pub mod extensions;

/// A kind of hygiene issue a package can be blamed for.
///
/// A single entry may fall into several categories at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Executable,
    Test,
    Benchmark,
    Image,
    ContinuousIntegration,
    LintOrEditorConfig,
    Jsx,
    #[serde(rename = "typescript")]
    TypeScript,
}

impl Category {
    /// Categories checked on every scan, in evaluation order.
    pub const CORE: [Category; 6] = [
        Category::Executable,
        Category::Test,
        Category::Benchmark,
        Category::Image,
        Category::ContinuousIntegration,
        Category::LintOrEditorConfig,
    ];

    /// Categories only checked when source-file detection is enabled.
    pub const SOURCES: [Category; 2] = [Category::Jsx, Category::TypeScript];

    /// Column header used by the table report.
    pub fn column(self) -> &'static str {
        match self {
            Category::Executable => "EXECUTABLE FILE",
            Category::Test => "TESTS",
            Category::Benchmark => "BENCH",
            Category::Image => "IMAGES",
            Category::ContinuousIntegration => "TRAVIS_FILES",
            Category::LintOrEditorConfig => "EDITOR_LINT_FILES",
            Category::Jsx => "HAS_JSX",
            Category::TypeScript => "HAS_TS",
        }
    }

    /// Returns `true` if `node` falls into this category.
    pub fn matches(self, node: &Node<'_>) -> bool {
        match self {
            Category::Executable => permissions::is_executable(node),
            Category::Test => artifacts::is_test(node.path),
            Category::Benchmark => artifacts::is_benchmark(node.path),
            Category::Image => extensions::is_image(node.path),
            Category::ContinuousIntegration => artifacts::is_ci_config(node.path),
            Category::LintOrEditorConfig => artifacts::is_lint_config(node.path),
            Category::Jsx => extensions::is_jsx(node.path),
            Category::TypeScript => extensions::is_typescript(node.path),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Executable => "executable",
            Category::Test => "test",
            Category::Benchmark => "benchmark",
            Category::Image => "image",
            Category::ContinuousIntegration => "continuous integration",
            Category::LintOrEditorConfig => "lint or editor config",
            Category::Jsx => "jsx",
            Category::TypeScript => "typescript",
        };
        f.write_str(name)
    }
}

/// A filesystem entry as handed over by the walk driver.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    /// Slash-separated path of the entry, relative to the scan root.
    pub path: &'a str,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// POSIX permission bits. Only the execute bits are consulted.
    pub mode: u32,
}

impl<'a> Node<'a> {
    pub fn file(path: &'a str, mode: u32) -> Self {
        Self {
            path,
            is_dir: false,
            mode,
        }
    }

    pub fn dir(path: &'a str) -> Self {
        Self {
            path,
            is_dir: true,
            mode: 0o755,
        }
    }
}

/// The ordered list of categories a store evaluates against every entry.
#[derive(Debug, Clone)]
pub struct RuleSet {
    categories: Vec<Category>,
}

impl RuleSet {
    /// Builds the rule list, appending the source-file categories when
    /// `include_sources` is set.
    pub fn new(include_sources: bool) -> Self {
        let mut categories = Category::CORE.to_vec();
        if include_sources {
            categories.extend(Category::SOURCES);
        }
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns every enabled category `node` falls into, in rule order.
    pub fn classify<'s>(&'s self, node: Node<'s>) -> impl Iterator<Item = Category> + 's {
        self.categories
            .iter()
            .copied()
            .filter(move |category| category.matches(&node))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(false)
    }
}
