//! Seeded day-stepped simulation over a hotel inventory
//!
//! The engine advances a virtual calendar one day at a time, exercising the
//! booking state machine with stochastic demand and accumulating an ordered
//! event log plus run statistics.

pub mod clock;
pub mod engine;
pub mod error;
pub mod event;
pub mod logging;
pub mod policies;
pub mod results;

pub use clock::{SimulationClock, TimeWindow};
pub use engine::{run_simulation, SimulationEngine};
pub use error::{SimulationError, SimulationResult};
pub use event::SimulationEvent;
pub use logging::LoggingConfig;
pub use policies::{demand_policies, DemandKind, DemandPolicy};
pub use results::{RunReport, SimulationResults};
