// Substring checks run on the full path, not the file name: a directory named
// `test-utils` or a file under `benchmarks/` matches as well.

/// Test suites, test runner configs and coverage output.
pub const TEST_MARKERS: &[&str] = &["test", "tests", ".zuul.yml", "coverage", ".coveralls.yml"];

/// Benchmark suites.
pub const BENCH_MARKERS: &[&str] = &["bench"];

/// Continuous integration configs.
pub const CI_MARKERS: &[&str] = &[".travis.yml"];

/// Linter and editor configs.
pub const LINT_MARKERS: &[&str] = &[".editorconfig", ".eslintrc", ".sass-lint.yml", ".jshintrc"];

fn contains_any(path: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| path.contains(marker))
}

pub fn is_test(path: &str) -> bool {
    contains_any(path, TEST_MARKERS)
}

pub fn is_benchmark(path: &str) -> bool {
    contains_any(path, BENCH_MARKERS)
}

pub fn is_ci_config(path: &str) -> bool {
    contains_any(path, CI_MARKERS)
}

pub fn is_lint_config(path: &str) -> bool {
    contains_any(path, LINT_MARKERS)
}
