//! Floor layout: team widths, compaction, and free-offset computation
//!
//! A placed team occupies a horizontal strip proportional to its share of
//! the floor's capacity. Compaction left-aligns every strip with zero
//! gaps; it is pure layout normalization and never changes membership or
//! occupancy totals.

use crate::campus::model::Floor;
use std::cmp::Ordering;

/// Rendered pixel width of a team occupying `occupancy` seats on a floor
/// of the given capacity
pub fn team_width(occupancy: u32, capacity: u32, floor_px_width: f32) -> f32 {
    (occupancy as f32 / capacity as f32) * floor_px_width
}

/// Re-lay-out every placed team left-aligned with zero gaps
///
/// Teams are laid out in ascending order of their current offset; the
/// sort is stable, so equal offsets keep the order they were encountered
/// in. The backing sequence itself is not reordered. Compacting twice
/// produces the same offsets as compacting once.
pub fn compact_floor(floor: &mut Floor, floor_px_width: f32) {
    if floor.teams.is_empty() {
        return;
    }

    let mut order: Vec<usize> = (0..floor.teams.len()).collect();
    order.sort_by(|&a, &b| {
        floor.teams[a]
            .offset_x
            .partial_cmp(&floor.teams[b].offset_x)
            .unwrap_or(Ordering::Equal)
    });

    let mut cursor = 0.0;
    for idx in order {
        let placed = &mut floor.teams[idx];
        placed.offset_x = cursor;
        cursor += team_width(placed.team.occupancy, floor.capacity, floor_px_width);
    }
}

/// Offset immediately after the rightmost placed team (0 on an empty
/// floor), used to append a new team after the last occupant
pub fn free_offset(floor: &Floor, floor_px_width: f32) -> f32 {
    floor
        .teams
        .iter()
        .map(|p| p.offset_x + team_width(p.team.occupancy, floor.capacity, floor_px_width))
        .fold(0.0, f32::max)
}
