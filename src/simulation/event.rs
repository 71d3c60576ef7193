//! Simulation run-log events
//!
//! One record per business occurrence, in the order the scheduler processed
//! it. Group bookings produce a single aggregate event with no reservation id
//! and a comma-joined room list.

use crate::types::{GuestId, ReservationId, SimEventType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single entry in the ordered simulation event log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// 1-based simulation day the event occurred on
    pub day: u32,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Sampled time of day, "HH:MM"
    pub time: String,
    /// Event category
    pub event_type: SimEventType,
    /// Human-readable description
    pub description: String,
    /// Dollar amount tied to the event; 0.0 when none applies
    pub amount: f64,
    /// Guest involved, when a single guest applies
    pub guest_id: Option<GuestId>,
    /// Room number, or a comma-joined list for group bookings
    pub room_number: Option<String>,
    /// Reservation involved; absent for aggregate group events
    pub reservation_id: Option<ReservationId>,
}
