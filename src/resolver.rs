/// Directory name under which a package manager installs dependencies.
pub const MODULES_DIR: &str = "node_modules";

/// Directory holding generated executable shims. Never a package.
pub const BIN_DIR: &str = ".bin";

/// Returns the name of the package owning the directory `dir`.
///
/// The owner is the segment right after the last `node_modules` segment, so a
/// dependency nested in another package's own `node_modules` is attributed to
/// itself rather than to the top-level package. Without a marker the path is
/// assumed to be rooted at a package and the first segment is the owner,
/// falling back to the second one for paths with a leading `/`.
///
/// A trailing `node_modules` belongs to the package before it:
/// `a/node_modules/b/node_modules` resolves to `b`, not to the top-level `a`.
///
/// Returns `""` when the path has no usable segment (e.g. `/`).
pub fn resolve_owner(dir: &str) -> &str {
    if let Some(owner) = owner_after_last_marker(dir) {
        return owner;
    }

    let mut segments = dir.split('/');
    match segments.next() {
        Some(first) if !first.is_empty() => first,
        _ => segments.next().unwrap_or(""),
    }
}

/// Returns `true` for names that must never be recorded as packages.
pub fn is_reserved(owner: &str) -> bool {
    owner.is_empty() || owner == BIN_DIR
}

// A trailing marker is the `node_modules` directory of the package before it,
// so the search moves on to the previous marker.
fn owner_after_last_marker(dir: &str) -> Option<&str> {
    let mut following = None;
    for segment in dir.rsplit('/') {
        if segment != MODULES_DIR {
            following = Some(segment);
        } else if following.is_some() {
            return following;
        }
    }
    None
}
