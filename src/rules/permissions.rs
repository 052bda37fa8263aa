use super::Node;

/// Owner, group and other execute bits.
pub const EXECUTE_BITS: u32 = 0o111;

/// Matches regular files with any execute bit set. Directories always carry
/// execute bits, so they never match.
pub fn is_executable(node: &Node<'_>) -> bool {
    !node.is_dir && node.mode & EXECUTE_BITS != 0
}
