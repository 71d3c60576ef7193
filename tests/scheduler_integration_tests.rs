//! Integration tests for the day-stepped scheduler against the state machine

use chrono::NaiveDate;
use hotel_sim::booking::TAX_RATE;
use hotel_sim::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn silent_config(days: u32) -> SimulationConfig {
    SimulationConfig {
        days,
        seed: Some(11),
        total_rooms: 5,
        total_floors: 1,
        start_date: d("2026-02-01"),
        standard_booking_probability: 0.0,
        walk_in_probability: 0.0,
        group_booking_probability: 0.0,
        extended_stay_probability: 0.0,
        loyalty_booking_probability: 0.0,
        special_request_probability: 0.0,
        cancellation_probability: 0.0,
        ..Default::default()
    }
}

/// With demand silenced, pre-seeded reservations still check in and out on time
#[test]
fn test_due_transitions_run_without_demand() {
    let config = silent_config(6);
    let mut inventory = Inventory::new(HotelId(1), "Harborview Hotel", d("2026-02-01"));
    for n in 1..=5 {
        inventory.add_room(1, format!("10{n}"), "Standard", 100.0, 2);
    }
    let guest = inventory.add_guest("Jane", "Smith");
    let reservation =
        create_reservation(&mut inventory, guest, RoomId(1), d("2026-02-02"), d("2026-02-05"), TAX_RATE)
            .unwrap();

    let results = run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    // No demand fired, so the only events are the seeded stay's transitions
    assert_eq!(results.total_reservations, 0);
    assert_eq!(results.events.len(), 2);
    assert_eq!(results.events[0].event_type, SimEventType::CheckIn);
    assert_eq!(results.events[0].day, 2);
    assert_eq!(results.events[1].event_type, SimEventType::CheckOut);
    assert_eq!(results.events[1].day, 5);
    assert_eq!(results.events[1].amount, 330.0);
    assert_eq!(results.total_revenue, 330.0);

    let stored = inventory.reservation(reservation.id).unwrap();
    assert_eq!(stored.status, ReservationStatus::CheckedOut);
    assert_eq!(stored.payment_status, PaymentStatus::Paid);
}

/// Occupancy rollups reflect the seeded stay's nights
#[test]
fn test_occupancy_rollup_tracks_stay() {
    let config = silent_config(6);
    let mut inventory = Inventory::new(HotelId(1), "Harborview Hotel", d("2026-02-01"));
    for n in 1..=5 {
        inventory.add_room(1, format!("10{n}"), "Standard", 100.0, 2);
    }
    let guest = inventory.add_guest("Jane", "Smith");
    create_reservation(&mut inventory, guest, RoomId(1), d("2026-02-02"), d("2026-02-05"), TAX_RATE)
        .unwrap();

    let results = run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    // Day 1: room held by the future reservation. Days 2-4: occupied.
    // Day 5: checked out in the morning sweep, free by the rollup.
    assert_eq!(results.daily_occupancy, vec![20.0, 20.0, 20.0, 20.0, 0.0, 0.0]);
}

/// The scheduler never leaves two overlapping active reservations on one room
#[test]
fn test_no_overlapping_active_reservations_after_heavy_run() {
    let config = SimulationConfig {
        days: 60,
        seed: Some(2024),
        total_rooms: 6,
        total_floors: 2,
        standard_booking_probability: 0.95,
        walk_in_probability: 0.7,
        group_booking_probability: 0.5,
        extended_stay_probability: 0.4,
        loyalty_booking_probability: 0.6,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let mut inventory = generate_inventory(&config, &mut rng);
    run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    let active: Vec<_> = inventory.reservations().filter(|r| r.is_active()).collect();
    for (i, a) in active.iter().enumerate() {
        for b in active.iter().skip(i + 1) {
            if a.room_id == b.room_id {
                assert!(
                    !a.overlaps(b.check_in, b.check_out),
                    "active reservations {} and {} overlap on {}",
                    a.id,
                    b.id,
                    a.room_id
                );
            }
        }
    }
}

/// Every settled payment in the ledger matches its reservation's stored price
#[test]
fn test_ledger_settlements_match_reservations() {
    let config = SimulationConfig {
        days: 45,
        seed: Some(31),
        total_rooms: 12,
        total_floors: 3,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(31);
    let mut inventory = generate_inventory(&config, &mut rng);
    run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    for transaction in inventory.transactions() {
        if transaction.transaction_type != TransactionType::Payment {
            continue;
        }
        let reservation = inventory.reservation(transaction.reservation_id).unwrap();
        assert_eq!(reservation.status, ReservationStatus::CheckedOut);
        assert_eq!(transaction.amount, reservation.total_price);
    }
}

/// Advance bookings start ahead of arrival so the morning sweeps can see them
#[test]
fn test_advance_bookings_start_in_the_future() {
    let config = SimulationConfig {
        days: 20,
        seed: Some(14),
        total_rooms: 40,
        total_floors: 4,
        standard_booking_probability: 1.0,
        walk_in_probability: 0.0,
        group_booking_probability: 0.0,
        extended_stay_probability: 0.0,
        loyalty_booking_probability: 0.0,
        special_request_probability: 0.0,
        cancellation_probability: 0.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(14);
    let mut inventory = generate_inventory(&config, &mut rng);
    let results = run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    let bookings: Vec<_> = results
        .events
        .iter()
        .filter(|e| e.event_type == SimEventType::NewReservation)
        .collect();
    assert!(!bookings.is_empty(), "standard policy at probability 1.0 never fired");
    for event in bookings {
        let reservation = inventory.reservation(event.reservation_id.unwrap()).unwrap();
        assert!(
            reservation.check_in > event.date,
            "advance booking {} starts the day it was made",
            reservation.id
        );
        assert!(reservation.check_in <= event.date + chrono::Duration::days(7));
    }
}

/// A walk-in's inline check-in shows up in the event log alongside the booking
#[test]
fn test_walk_in_bookings_emit_check_in_events() {
    let config = SimulationConfig {
        days: 15,
        seed: Some(21),
        total_rooms: 10,
        total_floors: 2,
        standard_booking_probability: 0.0,
        walk_in_probability: 1.0,
        group_booking_probability: 0.0,
        extended_stay_probability: 0.0,
        loyalty_booking_probability: 0.0,
        special_request_probability: 0.0,
        cancellation_probability: 0.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(21);
    let mut inventory = generate_inventory(&config, &mut rng);
    let results = run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    let walk_ins: Vec<_> = results
        .events
        .iter()
        .filter(|e| e.event_type == SimEventType::WalkInBooking)
        .collect();
    assert!(!walk_ins.is_empty(), "walk-in policy at probability 1.0 never fired");
    for booking in &walk_ins {
        let id = booking.reservation_id.unwrap();
        assert!(
            results.events.iter().any(|e| e.event_type == SimEventType::CheckIn
                && e.reservation_id == Some(id)
                && e.day == booking.day),
            "walk-in {id} has no same-day check-in event"
        );
    }
}

/// Group events aggregate several rooms under one entry with no reservation id
#[test]
fn test_group_events_are_aggregates() {
    let config = SimulationConfig {
        days: 30,
        seed: Some(77),
        total_rooms: 30,
        total_floors: 3,
        standard_booking_probability: 0.0,
        walk_in_probability: 0.0,
        group_booking_probability: 1.0,
        extended_stay_probability: 0.0,
        loyalty_booking_probability: 0.0,
        special_request_probability: 0.0,
        cancellation_probability: 0.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(77);
    let mut inventory = generate_inventory(&config, &mut rng);
    let results = run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    let groups: Vec<_> =
        results.events.iter().filter(|e| e.event_type == SimEventType::GroupBooking).collect();
    assert!(!groups.is_empty(), "group policy at probability 1.0 never fired");
    assert_eq!(results.total_group_bookings as usize, groups.len());
    for event in groups {
        assert!(event.reservation_id.is_none());
        let rooms = event.room_number.as_deref().unwrap_or_default();
        assert!(rooms.split(", ").count() >= 1);
        assert!(event.amount > 0.0);
    }
}

/// Cancellations only ever hit future confirmed reservations
#[test]
fn test_cancellations_never_touch_in_house_stays() {
    let config = SimulationConfig {
        days: 40,
        seed: Some(555),
        total_rooms: 15,
        total_floors: 3,
        cancellation_probability: 0.5,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(555);
    let mut inventory = generate_inventory(&config, &mut rng);
    let results = run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    // Cancelled reservations must never have settled a payment
    for reservation in inventory.reservations() {
        if reservation.status == ReservationStatus::Cancelled {
            assert_eq!(reservation.payment_status, PaymentStatus::Pending);
            assert!(inventory.transactions_for(reservation.id).is_empty());
        }
    }
    let cancellation_events =
        results.events.iter().filter(|e| e.event_type == SimEventType::Cancellation).count();
    assert_eq!(cancellation_events as u32, results.total_cancellations);
}

/// Special request charges land in the ledger and the ancillary counters agree
#[test]
fn test_special_request_charges_recorded() {
    let config = SimulationConfig {
        days: 30,
        seed: Some(808),
        total_rooms: 10,
        total_floors: 2,
        walk_in_probability: 0.9,
        special_request_probability: 1.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(808);
    let mut inventory = generate_inventory(&config, &mut rng);
    let results = run_simulation(&config, &mut inventory, HotelId(1)).unwrap();

    let charge_total: f64 = inventory
        .transactions()
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Charge)
        .map(|t| t.amount)
        .sum();
    assert!((charge_total - results.ancillary_revenue).abs() < 0.01);
    let charge_count = inventory
        .transactions()
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Charge)
        .count();
    assert_eq!(charge_count as u32, results.total_special_requests);
}
