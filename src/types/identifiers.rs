//! Integer identifier types for the booking simulator
//!
//! The inventory store keys every record by a small integer id. Newtypes keep
//! the id spaces apart so a reservation id can never be passed where a room
//! id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotelId(pub u32);

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hotel-{}", self.0)
    }
}

/// Unique identifier for a room within a hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room-{}", self.0)
    }
}

/// Unique identifier for a guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(pub u32);

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guest-{}", self.0)
    }
}

/// Unique identifier for a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub u32);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reservation-{}", self.0)
    }
}

/// Unique identifier for a ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u32);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(HotelId(1).to_string(), "hotel-1");
        assert_eq!(RoomId(203).to_string(), "room-203");
        assert_eq!(GuestId(7).to_string(), "guest-7");
        assert_eq!(ReservationId(42).to_string(), "reservation-42");
        assert_eq!(TransactionId(9).to_string(), "txn-9");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ReservationId(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let back: ReservationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ids_are_ordered() {
        assert!(RoomId(1) < RoomId(2));
        assert!(GuestId(10) > GuestId(3));
    }
}
