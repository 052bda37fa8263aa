use std::path::Path;

/// Returns everything before the last `/` of a slash-separated path.
///
/// Unlike `Path::parent`, the result stays a plain `&str` so the resolver can
/// split it without allocating. A path without any separator has no
/// containing directory and yields `""`; a path directly under the root
/// yields `"/"`.
pub fn parent_dir(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => trimmed[..idx].trim_end_matches('/'),
        None if path.starts_with('/') => "/",
        None => "",
    }
}

/// Returns the extension of the last path element, including the dot.
///
/// Dotfiles count as having an extension (`.eslintrc` -> `.eslintrc`), and a
/// name without a dot yields `""`.
pub fn extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// Renders `path` relative to `root` with `/` separators.
///
/// The root itself maps to `""`. Paths outside `root` are rendered as-is.
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut out = String::new();
    for component in rel.components() {
        let part = component.as_os_str().to_string_lossy();
        if part == "/" {
            out.push('/');
            continue;
        }
        if !out.is_empty() && !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(&part);
    }
    out
}
