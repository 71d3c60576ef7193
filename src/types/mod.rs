//! Core types for the hotel booking simulator
//!
//! This module contains identifier newtypes, shared status enums, and the
//! simulation configuration.

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{
    special_request_fees, CliArgs, ConfigError, ConfigFile, ConfigValidationError,
    SimulationConfig,
};
pub use enums::{
    OutputFormat, PaymentStatus, ReservationStatus, RoomStatus, SimEventType, TransactionType,
};
pub use identifiers::{GuestId, HotelId, ReservationId, RoomId, TransactionId};
