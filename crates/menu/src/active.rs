//! Active-route matching policy.

/// Returns whether a menu entry with `entry_path` is active for
/// `current_path`.
///
/// The policy is exact string equality: no trailing-slash normalization, no
/// prefix matching, and no ancestor activation. `/products/popular` activates
/// only the entry whose path is exactly `/products/popular`; its parent group
/// at `/products` stays inactive. This is a known limitation carried over
/// deliberately; router-style "smart" matching would change which entries
/// highlight and is out of scope.
///
/// Entries with an empty path (pure group headers) are never active.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    !entry_path.is_empty() && current_path == entry_path
}
