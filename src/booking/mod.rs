//! Booking state machine, availability resolution, and pricing
//!
//! All writes to reservation and room status flow through this module; each
//! operation either commits completely or leaves the inventory untouched.

pub mod availability;
pub mod error;
pub mod pricing;
pub mod reservations;

pub use availability::{find_available, interval_is_free};
pub use error::BookingError;
pub use pricing::{quote, round_cents, TAX_RATE};
pub use reservations::{
    cancel, check_in, check_out, create_reservation, record_charge, FINAL_PAYMENT_DESCRIPTION,
};
