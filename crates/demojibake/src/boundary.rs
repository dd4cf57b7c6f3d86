//! Safe cut-point selection between processing windows.

use crate::classify::sequence_starts_at;

/// Finds the rightmost index in `1..window.len()` at which a complete,
/// well-formed sequence starts, or `None` when no such index exists.
///
/// Everything before the returned index belongs to complete sequences (or to
/// damaged material the repair pass resolves on its own), so the caller can
/// repair and emit that prefix without ever bisecting a character. The
/// vouched-for sequence itself is deferred along with the bytes after it: the
/// classifier's guarantee is purely structural, and re-examining that small
/// tail with the next window costs nothing.
///
/// Index `0` is never returned; a cut there would emit nothing. When the
/// whole window is unclassifiable the caller must either grow the window or,
/// if it cannot grow, hand the window to the repair pass whole and let the
/// orphaned-byte fallback resolve it.
#[must_use]
pub fn find_cut(window: &[u8]) -> Option<usize> {
    (1..window.len())
        .rev()
        .find(|&pos| sequence_starts_at(window, pos))
}
