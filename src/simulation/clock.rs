//! Virtual calendar and time-of-day sampling
//!
//! The simulation advances in whole days; wall-clock time never enters the
//! run. Events carry a sampled "HH:MM" time of day drawn from a window fitting
//! the event kind, purely for log realism.

use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Day counter and calendar date for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationClock {
    start: NaiveDate,
    current: NaiveDate,
    day: u32,
}

impl SimulationClock {
    /// Create a clock positioned before day 1
    pub fn new(start: NaiveDate) -> Self {
        Self { start, current: start, day: 0 }
    }

    /// First calendar date of the run
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Current calendar date
    pub fn current_date(&self) -> NaiveDate {
        self.current
    }

    /// Current 1-based day number; 0 before the run starts
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Move to the next simulated day, returning its number and date
    pub fn advance(&mut self) -> (u32, NaiveDate) {
        self.day += 1;
        self.current = self.start + Duration::days(i64::from(self.day) - 1);
        (self.day, self.current)
    }
}

/// Inclusive minute-of-day window for sampling event times
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    start_minute: u32,
    end_minute: u32,
}

impl TimeWindow {
    const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self { start_minute: start_hour * 60, end_minute: end_hour * 60 }
    }

    /// Draw a uniformly random "HH:MM" time inside the window
    pub fn sample(&self, rng: &mut impl Rng) -> String {
        let minute = rng.gen_range(self.start_minute..=self.end_minute);
        format!("{:02}:{:02}", minute / 60, minute % 60)
    }
}

/// Arrival desk hours
pub const CHECK_IN_WINDOW: TimeWindow = TimeWindow::new(14, 23);

/// Departure desk hours
pub const CHECK_OUT_WINDOW: TimeWindow = TimeWindow::new(7, 12);

/// Advance booking hours
pub const BOOKING_WINDOW: TimeWindow = TimeWindow::new(9, 18);

/// Walk-in arrival hours
pub const WALK_IN_WINDOW: TimeWindow = TimeWindow::new(14, 20);

/// Group sales hours
pub const GROUP_WINDOW: TimeWindow = TimeWindow::new(10, 16);

/// Office hours for cancellations, loyalty desks, and guest services
pub const OFFICE_WINDOW: TimeWindow = TimeWindow::new(9, 17);
