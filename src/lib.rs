//! Hotel Booking Simulator
//!
//! A hotel room inventory and reservation lifecycle simulator that drives a
//! booking state machine through seeded, day-stepped stochastic demand,
//! producing an ordered business event log and run statistics.
//!
//! # Overview
//!
//! This library models one hotel: its rooms, guests, reservations, and
//! financial ledger. A reservation moves `confirmed -> checked_in ->
//! checked_out` (or `confirmed -> cancelled`), each transition updating the
//! room's cached status and, at check-out, settling payment into the ledger
//! in the same atomic commit. On top sits a scheduler that simulates days of
//! demand: advance bookings, walk-ins, group bookings, extended stays,
//! loyalty bookings, special requests, and cancellations, all drawn from a
//! single seeded random stream so runs are reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_sim::inventory::generate_inventory;
//! use hotel_sim::simulation::run_simulation;
//! use hotel_sim::types::{HotelId, SimulationConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = SimulationConfig { days: 7, seed: Some(42), ..Default::default() };
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut inventory = generate_inventory(&config, &mut rng);
//!
//! let results = run_simulation(&config, &mut inventory, HotelId(1))?;
//! println!("{} reservations over {} days", results.total_reservations, results.total_days);
//! # Ok::<(), hotel_sim::simulation::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums, and configuration
//! - [`inventory`]: The in-memory store for rooms, guests, reservations, and the ledger
//! - [`booking`]: The reservation state machine, availability resolution, and pricing
//! - [`simulation`]: The day-stepped scheduler, demand policies, and run results
//! - [`reporting`]: Read-only status and financial reports, plus event export
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod booking;
pub mod inventory;
pub mod reporting;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    ConfigValidationError,
    GuestId,
    // Identifiers
    HotelId,
    OutputFormat,
    PaymentStatus,
    ReservationId,
    // Enums
    ReservationStatus,
    RoomId,
    RoomStatus,
    SimEventType,
    // Configuration
    SimulationConfig,
    TransactionId,
    TransactionType,
};

// Inventory records and store
pub use inventory::{generate_inventory, Guest, Inventory, Reservation, Room, Transaction};

// Booking state machine
pub use booking::{
    cancel, check_in, check_out, create_reservation, find_available, BookingError,
};

// Simulation engine and results
pub use simulation::{
    run_simulation, LoggingConfig, RunReport, SimulationEngine, SimulationError, SimulationEvent,
    SimulationResults,
};

// Reports
pub use reporting::{financial_summary, hotel_status, FinancialSummary, HotelStatus};
