//! Run accumulator and the end-of-run report
//!
//! [`SimulationResults`] is threaded through every simulated day and collects
//! counters plus the ordered event log; nothing about a run is kept in global
//! state. [`RunReport`] derives the aggregate views from a finished run.

use crate::booking::round_cents;
use crate::simulation::event::SimulationEvent;
use crate::types::SimEventType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A day counts as busy at or above this many check-ins
const BUSY_DAY_CHECK_INS: usize = 3;

/// A day counts as slow at or below this many events
const SLOW_DAY_EVENTS: usize = 2;

/// Accumulated outcome of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimulationResults {
    /// Number of days simulated
    pub total_days: u32,
    /// Guests created during the run
    pub total_guests: u32,
    /// Reservations created during the run
    pub total_reservations: u32,
    /// Revenue settled at check-out plus ancillary charges
    pub total_revenue: f64,
    /// Ancillary revenue from special requests
    pub ancillary_revenue: f64,
    /// Reservations cancelled during the run
    pub total_cancellations: u32,
    /// Walk-in bookings created
    pub total_walk_ins: u32,
    /// Group bookings created (parties, not rooms)
    pub total_group_bookings: u32,
    /// Extended-stay bookings created
    pub total_extended_stays: u32,
    /// Loyalty bookings created
    pub total_loyalty_bookings: u32,
    /// Special requests fulfilled
    pub total_special_requests: u32,
    /// End-of-day occupancy percentage for each simulated day
    pub daily_occupancy: Vec<f64>,
    /// Average of the daily occupancy rates; set by [`finalize`](Self::finalize)
    pub occupancy_rate: f64,
    /// Ordered event log for the whole run
    pub events: Vec<SimulationEvent>,
}

impl SimulationResults {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the ordered log
    pub fn push_event(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Record the end-of-day occupancy rate
    pub fn record_day(&mut self, occupancy: f64) {
        self.total_days += 1;
        self.daily_occupancy.push(occupancy);
    }

    /// Compute run averages once all days have been stepped
    pub fn finalize(&mut self) {
        if self.daily_occupancy.is_empty() {
            self.occupancy_rate = 0.0;
        } else {
            let sum: f64 = self.daily_occupancy.iter().sum();
            self.occupancy_rate = round_cents(sum / self.daily_occupancy.len() as f64);
        }
        self.total_revenue = round_cents(self.total_revenue);
        self.ancillary_revenue = round_cents(self.ancillary_revenue);
    }
}

/// Aggregate views over a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Event counts by category
    pub events_by_type: BTreeMap<SimEventType, usize>,
    /// Dollar totals by event category
    pub revenue_by_type: BTreeMap<SimEventType, f64>,
    /// Days with at least three check-ins
    pub busy_days: Vec<u32>,
    /// Days with two or fewer events
    pub slow_days: Vec<u32>,
    /// Highest end-of-day occupancy seen, as (day, rate)
    pub peak_occupancy: Option<(u32, f64)>,
}

impl RunReport {
    /// Build the report from a finished run
    pub fn from_results(results: &SimulationResults) -> Self {
        let mut events_by_type: BTreeMap<SimEventType, usize> = BTreeMap::new();
        let mut revenue_by_type: BTreeMap<SimEventType, f64> = BTreeMap::new();
        let mut events_per_day: BTreeMap<u32, usize> = BTreeMap::new();
        let mut check_ins_per_day: BTreeMap<u32, usize> = BTreeMap::new();

        for day in 1..=results.total_days {
            events_per_day.insert(day, 0);
        }
        for event in &results.events {
            *events_by_type.entry(event.event_type).or_insert(0) += 1;
            let total = revenue_by_type.entry(event.event_type).or_insert(0.0);
            *total = round_cents(*total + event.amount);
            *events_per_day.entry(event.day).or_insert(0) += 1;
            if event.event_type == SimEventType::CheckIn {
                *check_ins_per_day.entry(event.day).or_insert(0) += 1;
            }
        }

        let busy_days = check_ins_per_day
            .iter()
            .filter(|(_, &count)| count >= BUSY_DAY_CHECK_INS)
            .map(|(&day, _)| day)
            .collect();
        let slow_days = events_per_day
            .iter()
            .filter(|(_, &count)| count <= SLOW_DAY_EVENTS)
            .map(|(&day, _)| day)
            .collect();

        let peak_occupancy = results
            .daily_occupancy
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, &rate)| (i as u32 + 1, rate));

        Self { events_by_type, revenue_by_type, busy_days, slow_days, peak_occupancy }
    }
}
