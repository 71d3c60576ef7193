//! Status and category enums shared across the simulator
//!
//! Room status is a cached projection of reservation state: it is written
//! only as a side effect of a reservation transition (maintenance being the
//! one out-of-band override).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// No active reservation holds the room
    Available,
    /// A confirmed reservation holds the room but has not started
    Reserved,
    /// A checked-in reservation currently occupies the room
    Occupied,
    /// Taken out of service; out-of-band override, not reservation-driven
    Maintenance,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoomStatus::Available => "available",
            RoomStatus::Reserved => "reserved",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
        };
        f.write_str(s)
    }
}

/// Lifecycle status of a reservation
///
/// Legal transitions: `Confirmed -> CheckedIn -> CheckedOut` and
/// `Confirmed -> Cancelled`. `CheckedOut` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Created and holding the room for a future or current interval
    Confirmed,
    /// Guest has arrived; the room is occupied
    CheckedIn,
    /// Stay completed and paid; terminal
    CheckedOut,
    /// Withdrawn before arrival; terminal
    Cancelled,
}

impl ReservationStatus {
    /// Whether this reservation still holds its room for overlap purposes
    pub fn is_active(self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::CheckedIn)
    }

    /// Whether this status permits no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, ReservationStatus::CheckedOut | ReservationStatus::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Payment state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No payment has been taken yet
    Pending,
    /// The final payment transaction has been recorded
    Paid,
    /// A partial amount has been settled
    PartiallyPaid,
    /// The payment was returned to the guest
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::PartiallyPaid => "partially_paid",
            PaymentStatus::Refunded => "refunded",
        };
        f.write_str(s)
    }
}

/// Category of a ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money collected from the guest
    Payment,
    /// Money returned to the guest
    Refund,
    /// An incidental charge added to the stay
    Charge,
    /// A manual correction to the ledger
    Adjustment,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionType::Payment => "payment",
            TransactionType::Refund => "refund",
            TransactionType::Charge => "charge",
            TransactionType::Adjustment => "adjustment",
        };
        f.write_str(s)
    }
}

/// Category of a simulation event in the run log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimEventType {
    /// A due reservation transitioned to checked-in
    CheckIn,
    /// A due reservation transitioned to checked-out
    CheckOut,
    /// A standard advance booking was created
    NewReservation,
    /// A same-day booking was created
    WalkInBooking,
    /// Several rooms were booked under one booking party
    GroupBooking,
    /// A long-stay booking was created
    ExtendedStay,
    /// A loyalty-member booking was created
    LoyaltyBooking,
    /// An ancillary-revenue request from a checked-in guest
    SpecialRequest,
    /// A future confirmed reservation was cancelled
    Cancellation,
}

impl fmt::Display for SimEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimEventType::CheckIn => "check_in",
            SimEventType::CheckOut => "check_out",
            SimEventType::NewReservation => "new_reservation",
            SimEventType::WalkInBooking => "walk_in_booking",
            SimEventType::GroupBooking => "group_booking",
            SimEventType::ExtendedStay => "extended_stay",
            SimEventType::LoyaltyBooking => "loyalty_booking",
            SimEventType::SpecialRequest => "special_request",
            SimEventType::Cancellation => "cancellation",
        };
        f.write_str(s)
    }
}

/// Output format for the exported event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON document containing the ordered event array
    #[default]
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unsupported output format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_status_activity() {
        assert!(ReservationStatus::Confirmed.is_active());
        assert!(ReservationStatus::CheckedIn.is_active());
        assert!(!ReservationStatus::CheckedOut.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ReservationStatus::CheckedOut.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
        assert!(!ReservationStatus::Confirmed.is_terminal());
        assert!(!ReservationStatus::CheckedIn.is_terminal());
    }

    #[test]
    fn test_snake_case_serialization() {
        assert_eq!(serde_json::to_string(&ReservationStatus::CheckedIn).unwrap(), "\"checked_in\"");
        assert_eq!(serde_json::to_string(&RoomStatus::Maintenance).unwrap(), "\"maintenance\"");
        assert_eq!(serde_json::to_string(&TransactionType::Payment).unwrap(), "\"payment\"");
        assert_eq!(
            serde_json::to_string(&SimEventType::WalkInBooking).unwrap(),
            "\"walk_in_booking\""
        );
    }

    #[test]
    fn test_display_matches_serialized_form() {
        assert_eq!(ReservationStatus::CheckedOut.to_string(), "checked_out");
        assert_eq!(SimEventType::GroupBooking.to_string(), "group_booking");
        assert_eq!(PaymentStatus::PartiallyPaid.to_string(), "partially_paid");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
