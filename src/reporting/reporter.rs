//! Operational and financial reports over an inventory
//!
//! Reports are pure reads: they derive everything from the current inventory
//! state and the ledger, and never write anything back.

use crate::booking::round_cents;
use crate::inventory::{Inventory, ReservationFilter};
use crate::types::{ReservationStatus, RoomStatus, TransactionType};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time operational snapshot of a hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelStatus {
    /// Display name of the hotel
    pub hotel_name: String,
    /// Business date the snapshot was taken on
    pub as_of: NaiveDate,
    /// Total rooms in the inventory
    pub total_rooms: usize,
    /// Room counts by current status
    pub rooms_by_status: BTreeMap<RoomStatus, usize>,
    /// Occupancy percentage (occupied plus reserved rooms)
    pub occupancy_rate: f64,
    /// Reservations currently in house
    pub in_house: usize,
    /// Confirmed reservations arriving after the snapshot date
    pub upcoming_arrivals: usize,
}

/// Revenue summary derived from the ledger and the reservation book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Payments and charges minus refunds, from the ledger
    pub realized_revenue: f64,
    /// Ledger totals by transaction category
    pub revenue_by_type: BTreeMap<TransactionType, f64>,
    /// Total price of confirmed future reservations, not yet settled
    pub upcoming_revenue: f64,
    /// Average daily rate across completed stays
    pub average_daily_rate: f64,
    /// Realized revenue per available room
    pub revenue_per_available_room: f64,
}

/// Snapshot the hotel's operational state as of its business date
pub fn hotel_status(inventory: &Inventory) -> HotelStatus {
    let as_of = inventory.business_date();
    let in_house = inventory
        .query_reservations(&ReservationFilter {
            status: Some(ReservationStatus::CheckedIn),
            ..Default::default()
        })
        .len();
    let upcoming_arrivals = inventory
        .query_reservations(&ReservationFilter {
            status: Some(ReservationStatus::Confirmed),
            check_in_after: Some(as_of),
            ..Default::default()
        })
        .len();

    HotelStatus {
        hotel_name: inventory.hotel_name().to_string(),
        as_of,
        total_rooms: inventory.room_count(),
        rooms_by_status: inventory.rooms_by_status(),
        occupancy_rate: inventory.occupancy_rate(),
        in_house,
        upcoming_arrivals,
    }
}

/// Summarize realized and upcoming revenue
pub fn financial_summary(inventory: &Inventory) -> FinancialSummary {
    let mut revenue_by_type: BTreeMap<TransactionType, f64> = BTreeMap::new();
    let mut realized = 0.0;
    for transaction in inventory.transactions() {
        realized += transaction.signed_amount();
        let entry = revenue_by_type.entry(transaction.transaction_type).or_insert(0.0);
        *entry = round_cents(*entry + transaction.amount);
    }

    let as_of = inventory.business_date();
    let upcoming: f64 = inventory
        .query_reservations(&ReservationFilter {
            status: Some(ReservationStatus::Confirmed),
            check_in_after: Some(as_of),
            ..Default::default()
        })
        .iter()
        .map(|r| r.total_price)
        .sum();

    let completed: Vec<_> = inventory
        .query_reservations(&ReservationFilter {
            status: Some(ReservationStatus::CheckedOut),
            ..Default::default()
        })
        .iter()
        .filter(|r| r.nights() > 0)
        .map(|r| r.total_price / r.nights() as f64)
        .collect();
    let average_daily_rate = if completed.is_empty() {
        0.0
    } else {
        round_cents(completed.iter().sum::<f64>() / completed.len() as f64)
    };

    let revenue_per_available_room = if inventory.room_count() == 0 {
        0.0
    } else {
        round_cents(realized / inventory.room_count() as f64)
    };

    FinancialSummary {
        realized_revenue: round_cents(realized),
        revenue_by_type,
        upcoming_revenue: round_cents(upcoming),
        average_daily_rate,
        revenue_per_available_room,
    }
}

/// Project occupancy for the coming days from the active reservation book
///
/// For each date, counts rooms covered by an active reservation on that date
/// as a percentage of all rooms. Maintenance rooms stay in the denominator.
pub fn occupancy_forecast(
    inventory: &Inventory,
    from: NaiveDate,
    days: u32,
) -> Vec<(NaiveDate, f64)> {
    let total = inventory.room_count();
    (0..days)
        .map(|offset| {
            let date = from + Duration::days(i64::from(offset));
            if total == 0 {
                return (date, 0.0);
            }
            let held = inventory
                .reservations()
                .filter(|r| r.is_active() && r.covers(date))
                .map(|r| r.room_id)
                .collect::<std::collections::BTreeSet<_>>()
                .len();
            (date, round_cents(held as f64 / total as f64 * 100.0))
        })
        .collect()
}
