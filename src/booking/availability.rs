//! Availability resolution
//!
//! A room is free for an interval when no active reservation (confirmed or
//! checked-in) on it overlaps that interval. Terminal reservations never
//! block; back-to-back stays are allowed by the half-open interval rule.

use crate::inventory::{Inventory, Room, RoomFilter};
use crate::types::{RoomId, RoomStatus};
use chrono::NaiveDate;

/// Whether no active reservation on the room overlaps `[check_in, check_out)`
pub fn interval_is_free(
    inventory: &Inventory,
    room_id: RoomId,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> bool {
    !inventory
        .reservations()
        .any(|r| r.room_id == room_id && r.is_active() && r.overlaps(check_in, check_out))
}

/// Find rooms bookable for the interval, optionally narrowed by the filter
///
/// Only rooms whose base status is `Available` are considered, so rooms under
/// maintenance or currently held are excluded up front.
pub fn find_available<'a>(
    inventory: &'a Inventory,
    filter: &RoomFilter,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Vec<&'a Room> {
    let filter = RoomFilter { status: Some(RoomStatus::Available), ..filter.clone() };
    inventory
        .query_rooms(&filter)
        .into_iter()
        .filter(|room| interval_is_free(inventory, room.id, check_in, check_out))
        .collect()
}
