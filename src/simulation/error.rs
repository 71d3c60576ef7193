//! Error types and handling
//!
//! Errors that can stop a simulation run. Booking rejections during a run are
//! not represented here: the scheduler treats them as skipped trials, logs
//! them, and moves on.

use crate::booking::BookingError;
use crate::types::{ConfigValidationError, HotelId};
use thiserror::Error;

/// Errors that can occur while driving a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),

    /// The targeted hotel does not match the supplied inventory
    #[error("Unknown hotel: {0}")]
    UnknownHotel(HotelId),

    /// A booking operation failed outside the skip-and-continue path
    #[error("Booking operation failed: {0}")]
    Booking(#[from] BookingError),

    /// I/O error while writing results
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while exporting results
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export of the event log failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<anyhow::Error> for SimulationError {
    fn from(error: anyhow::Error) -> Self {
        SimulationError::Export(error.to_string())
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
