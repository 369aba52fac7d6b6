//! Hotspot numbering and next/previous navigation.
//!
//! Display numbers are 1-based and count only *assigned* hotspots (a
//! product is bound, style optional), ordered by start time. Navigation
//! walks the full time-sorted list regardless of completion, with
//! wraparound disabled at both ends.

use std::cmp::Ordering;

use crate::hotspot::Hotspot;
use crate::types::DbId;

/// Borrowed view of `hotspots` sorted by `(time_start, id)`.
fn time_sorted(hotspots: &[Hotspot]) -> Vec<&Hotspot> {
    let mut sorted: Vec<&Hotspot> = hotspots.iter().collect();
    sorted.sort_by(|a, b| {
        a.time_start
            .partial_cmp(&b.time_start)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// 1-based display index of hotspot `id` among assigned hotspots.
///
/// Returns `None` when the hotspot is unassigned or unknown — unassigned
/// hotspots carry no number in the editor.
pub fn display_number(hotspots: &[Hotspot], id: DbId) -> Option<usize> {
    time_sorted(hotspots)
        .iter()
        .filter(|h| h.is_assigned())
        .position(|h| h.id == id)
        .map(|idx| idx + 1)
}

/// The hotspot after `id` in the time-sorted list, or `None` at the end.
pub fn next_hotspot(hotspots: &[Hotspot], id: DbId) -> Option<&Hotspot> {
    let sorted = time_sorted(hotspots);
    let idx = sorted.iter().position(|h| h.id == id)?;
    sorted.get(idx + 1).copied()
}

/// The hotspot before `id` in the time-sorted list, or `None` at the start.
pub fn prev_hotspot(hotspots: &[Hotspot], id: DbId) -> Option<&Hotspot> {
    let sorted = time_sorted(hotspots);
    let idx = sorted.iter().position(|h| h.id == id)?;
    idx.checked_sub(1).and_then(|i| sorted.get(i)).copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
