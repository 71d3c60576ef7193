//! Booking error taxonomy
//!
//! Every rejected booking operation maps to exactly one of these variants.
//! A returned error always means the inventory was left untouched.

use crate::types::{ReservationId, ReservationStatus, RoomId};

/// Errors produced by the booking state machine
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Check-out is not strictly after check-in
    #[error("Invalid stay interval: check-in {check_in} must be before check-out {check_out}")]
    InvalidInterval {
        /// Requested check-in date
        check_in: chrono::NaiveDate,
        /// Requested check-out date
        check_out: chrono::NaiveDate,
    },

    /// The room cannot be booked for the requested interval
    #[error("Room {0} is not available for the requested interval")]
    RoomUnavailable(RoomId),

    /// A referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The reservation already went through this transition
    #[error("Reservation {0} was already processed (status: {1})")]
    AlreadyProcessed(ReservationId, ReservationStatus),

    /// The reservation's current status does not permit the transition
    #[error("Reservation {0} cannot transition from status {1}")]
    InvalidState(ReservationId, ReservationStatus),
}
