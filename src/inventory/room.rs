//! Room records and status helpers
//!
//! A room's `status` field is a cached projection of its reservation state:
//! it is only written as a side effect of a reservation transition, with
//! maintenance as the one out-of-band override.

use crate::types::{HotelId, RoomId, RoomStatus};
use serde::{Deserialize, Serialize};

/// Represents a hotel room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    pub id: RoomId,
    /// Hotel this room belongs to
    pub hotel_id: HotelId,
    /// Floor the room is on
    pub floor: u32,
    /// Human-readable room number, unique within the hotel
    pub room_number: String,
    /// Room category name (e.g. "Standard", "Deluxe", "Suite")
    pub room_type: String,
    /// Current cached status
    pub status: RoomStatus,
    /// Nightly rate in dollars
    pub price_per_night: f64,
    /// Maximum number of guests the room sleeps
    pub max_occupancy: u32,
}

impl Room {
    /// Create a new room in the `Available` state
    pub fn new(
        id: RoomId,
        hotel_id: HotelId,
        floor: u32,
        room_number: impl Into<String>,
        room_type: impl Into<String>,
        price_per_night: f64,
        max_occupancy: u32,
    ) -> Self {
        Self {
            id,
            hotel_id,
            floor,
            room_number: room_number.into(),
            room_type: room_type.into(),
            status: RoomStatus::Available,
            price_per_night,
            max_occupancy,
        }
    }

    /// Whether the room is bookable at its base status
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    /// Whether the room counts toward occupancy (held or occupied)
    pub fn is_occupied_or_held(&self) -> bool {
        matches!(self.status, RoomStatus::Occupied | RoomStatus::Reserved)
    }

    /// Whether the room is out of service
    pub fn is_under_maintenance(&self) -> bool {
        self.status == RoomStatus::Maintenance
    }
}
