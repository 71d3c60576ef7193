//! Reservation records and the interval overlap rule
//!
//! A reservation covers the half-open interval `[check_in, check_out)`. While
//! it is active (`confirmed` or `checked_in`), no other active reservation on
//! the same room may overlap that interval.

use crate::types::{GuestId, PaymentStatus, ReservationId, ReservationStatus, RoomId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a hotel reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier for the reservation
    pub id: ReservationId,
    /// Room the reservation holds
    pub room_id: RoomId,
    /// Guest the reservation is for
    pub guest_id: GuestId,
    /// First night of the stay
    pub check_in: NaiveDate,
    /// Departure date; the night of `check_out - 1` is the last night charged
    pub check_out: NaiveDate,
    /// Lifecycle status
    pub status: ReservationStatus,
    /// Total price computed at creation; immutable thereafter
    pub total_price: f64,
    /// Date the reservation was created
    pub booked_on: NaiveDate,
    /// Payment state
    pub payment_status: PaymentStatus,
}

impl Reservation {
    /// Number of nights the stay covers
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether the reservation still holds its room for overlap purposes
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether the reservation's interval contains the given date
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Whether this reservation's interval overlaps `[check_in, check_out)`
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        intervals_overlap(self.check_in, self.check_out, check_in, check_out)
    }
}

/// Half-open interval overlap test: `[a_start, a_end)` against `[b_start, b_end)`
///
/// Two intervals overlap iff `NOT (a_end <= b_start OR a_start >= b_end)`.
/// Back-to-back stays (one ending the day the other begins) do not overlap.
pub fn intervals_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    !(a_end <= b_start || a_start >= b_end)
}
