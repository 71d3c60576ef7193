//! Reservation state machine
//!
//! The four lifecycle operations plus ancillary charges. Each operation runs
//! inside [`Inventory::transact`], so a returned error always means nothing
//! was written: reservation status, room status, payment status, and ledger
//! entries move together or not at all.

use crate::booking::availability::interval_is_free;
use crate::booking::{pricing, BookingError};
use crate::inventory::{Inventory, Reservation};
use crate::types::{
    GuestId, PaymentStatus, ReservationId, ReservationStatus, RoomId, RoomStatus, TransactionId,
    TransactionType,
};
use chrono::NaiveDate;
use tracing::info;

/// Description recorded on the check-out settlement transaction
pub const FINAL_PAYMENT_DESCRIPTION: &str = "Final payment for stay";

/// Create a confirmed reservation holding the room for `[check_in, check_out)`
///
/// Validates the interval, prices the stay, and re-checks room availability
/// inside the same commit unit that writes the reservation, so two bookings
/// can never race each other onto one room. The room must be `Available` and
/// free of overlapping active reservations.
pub fn create_reservation(
    inventory: &mut Inventory,
    guest_id: GuestId,
    room_id: RoomId,
    check_in: NaiveDate,
    check_out: NaiveDate,
    tax_rate: f64,
) -> Result<Reservation, BookingError> {
    inventory.transact(|inv| {
        if inv.guest(guest_id).is_none() {
            return Err(BookingError::NotFound(format!("guest {guest_id}")));
        }
        let room = inv
            .room(room_id)
            .ok_or_else(|| BookingError::NotFound(format!("room {room_id}")))?;
        if !room.is_available() {
            return Err(BookingError::RoomUnavailable(room_id));
        }
        let total_price = pricing::quote(room, check_in, check_out, tax_rate)?;

        // Overlap check happens inside the commit unit, after the price is
        // locked in, so a stale availability list cannot double-book the room.
        if !interval_is_free(inv, room_id, check_in, check_out) {
            return Err(BookingError::RoomUnavailable(room_id));
        }

        let id = inv.insert_reservation(room_id, guest_id, check_in, check_out, total_price);
        inv.set_room_status(room_id, RoomStatus::Reserved);

        let reservation = inv
            .reservation(id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(format!("reservation {id}")))?;
        info!(
            reservation = %id,
            room = %room_id,
            guest = %guest_id,
            check_in = %check_in,
            check_out = %check_out,
            total = total_price,
            "reservation created"
        );
        Ok(reservation)
    })
}

/// Transition a confirmed reservation to checked-in
///
/// The room becomes `Occupied`. Repeating the call returns
/// [`BookingError::AlreadyProcessed`]; a cancelled reservation returns
/// [`BookingError::InvalidState`].
pub fn check_in(
    inventory: &mut Inventory,
    reservation_id: ReservationId,
) -> Result<Reservation, BookingError> {
    inventory.transact(|inv| {
        let reservation = inv
            .reservation(reservation_id)
            .ok_or_else(|| BookingError::NotFound(format!("reservation {reservation_id}")))?
            .clone();

        match reservation.status {
            ReservationStatus::Confirmed => {
                inv.set_reservation_status(reservation_id, ReservationStatus::CheckedIn);
                inv.set_room_status(reservation.room_id, RoomStatus::Occupied);
                info!(reservation = %reservation_id, room = %reservation.room_id, "guest checked in");
                inv.reservation(reservation_id)
                    .cloned()
                    .ok_or_else(|| BookingError::NotFound(format!("reservation {reservation_id}")))
            }
            ReservationStatus::CheckedIn | ReservationStatus::CheckedOut => {
                Err(BookingError::AlreadyProcessed(reservation_id, reservation.status))
            }
            ReservationStatus::Cancelled => {
                Err(BookingError::InvalidState(reservation_id, reservation.status))
            }
        }
    })
}

/// Transition a checked-in reservation to checked-out and settle payment
///
/// Marks the reservation paid, frees the room, and appends the final payment
/// to the ledger, all in one commit unit. Returns the amount settled.
pub fn check_out(
    inventory: &mut Inventory,
    reservation_id: ReservationId,
) -> Result<f64, BookingError> {
    inventory.transact(|inv| {
        let reservation = inv
            .reservation(reservation_id)
            .ok_or_else(|| BookingError::NotFound(format!("reservation {reservation_id}")))?
            .clone();

        match reservation.status {
            ReservationStatus::CheckedIn => {
                inv.set_reservation_status(reservation_id, ReservationStatus::CheckedOut);
                inv.set_payment_status(reservation_id, PaymentStatus::Paid);
                inv.set_room_status(reservation.room_id, RoomStatus::Available);
                inv.append_transaction(
                    reservation_id,
                    reservation.total_price,
                    TransactionType::Payment,
                    FINAL_PAYMENT_DESCRIPTION,
                );
                info!(
                    reservation = %reservation_id,
                    room = %reservation.room_id,
                    amount = reservation.total_price,
                    "guest checked out"
                );
                Ok(reservation.total_price)
            }
            ReservationStatus::CheckedOut => {
                Err(BookingError::AlreadyProcessed(reservation_id, reservation.status))
            }
            ReservationStatus::Confirmed | ReservationStatus::Cancelled => {
                Err(BookingError::InvalidState(reservation_id, reservation.status))
            }
        }
    })
}

/// Cancel a confirmed reservation before arrival
///
/// Frees the room. Only `Confirmed` reservations may cancel; a stay in
/// progress or completed returns [`BookingError::InvalidState`].
pub fn cancel(
    inventory: &mut Inventory,
    reservation_id: ReservationId,
) -> Result<Reservation, BookingError> {
    inventory.transact(|inv| {
        let reservation = inv
            .reservation(reservation_id)
            .ok_or_else(|| BookingError::NotFound(format!("reservation {reservation_id}")))?
            .clone();

        match reservation.status {
            ReservationStatus::Confirmed => {
                inv.set_reservation_status(reservation_id, ReservationStatus::Cancelled);
                inv.set_room_status(reservation.room_id, RoomStatus::Available);
                info!(reservation = %reservation_id, room = %reservation.room_id, "reservation cancelled");
                inv.reservation(reservation_id)
                    .cloned()
                    .ok_or_else(|| BookingError::NotFound(format!("reservation {reservation_id}")))
            }
            ReservationStatus::Cancelled => {
                Err(BookingError::AlreadyProcessed(reservation_id, reservation.status))
            }
            ReservationStatus::CheckedIn | ReservationStatus::CheckedOut => {
                Err(BookingError::InvalidState(reservation_id, reservation.status))
            }
        }
    })
}

/// Record an ancillary charge against a checked-in reservation
///
/// Used for special requests (upgrades, late checkout, amenities, room
/// service). The stay must be in progress.
pub fn record_charge(
    inventory: &mut Inventory,
    reservation_id: ReservationId,
    amount: f64,
    description: &str,
) -> Result<TransactionId, BookingError> {
    inventory.transact(|inv| {
        let reservation = inv
            .reservation(reservation_id)
            .ok_or_else(|| BookingError::NotFound(format!("reservation {reservation_id}")))?;
        if reservation.status != ReservationStatus::CheckedIn {
            return Err(BookingError::InvalidState(reservation_id, reservation.status));
        }
        let id = inv.append_transaction(
            reservation_id,
            pricing::round_cents(amount),
            TransactionType::Charge,
            description,
        );
        Ok(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::pricing::TAX_RATE;
    use crate::types::HotelId;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn booked_inventory() -> (Inventory, ReservationId) {
        let mut inv = Inventory::new(HotelId(1), "Harborview Hotel", d("2026-01-15"));
        inv.add_room(1, "101", "Standard", 100.0, 2);
        let guest = inv.add_guest("Jane", "Smith");
        let reservation =
            create_reservation(&mut inv, guest, RoomId(1), d("2026-02-01"), d("2026-02-04"), TAX_RATE)
                .unwrap();
        (inv, reservation.id)
    }

    #[test]
    fn test_create_prices_and_holds_room() {
        let (inv, id) = booked_inventory();
        let reservation = inv.reservation(id).unwrap();
        assert_eq!(reservation.total_price, 330.0);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.payment_status, PaymentStatus::Pending);
        assert_eq!(reservation.booked_on, d("2026-01-15"));
        assert_eq!(inv.room(RoomId(1)).unwrap().status, RoomStatus::Reserved);
    }

    #[test]
    fn test_create_rejects_unknown_guest() {
        let mut inv = Inventory::new(HotelId(1), "Harborview Hotel", d("2026-01-01"));
        inv.add_room(1, "101", "Standard", 100.0, 2);
        let err = create_reservation(
            &mut inv,
            GuestId(99),
            RoomId(1),
            d("2026-02-01"),
            d("2026-02-04"),
            TAX_RATE,
        )
        .unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[test]
    fn test_create_rejects_overlap_and_writes_nothing() {
        let (mut inv, _) = booked_inventory();
        let guest = inv.add_guest("Alex", "Nguyen");
        let before = inv.reservations().count();

        let err =
            create_reservation(&mut inv, guest, RoomId(1), d("2026-02-02"), d("2026-02-03"), TAX_RATE)
                .unwrap_err();
        assert!(matches!(err, BookingError::RoomUnavailable(RoomId(1))));
        assert_eq!(inv.reservations().count(), before);
    }

    #[test]
    fn test_invalid_interval_rejected_before_any_write() {
        let mut inv = Inventory::new(HotelId(1), "Harborview Hotel", d("2026-01-01"));
        inv.add_room(1, "101", "Standard", 100.0, 2);
        let guest = inv.add_guest("Jane", "Smith");

        let err =
            create_reservation(&mut inv, guest, RoomId(1), d("2026-02-04"), d("2026-02-01"), TAX_RATE)
                .unwrap_err();
        assert!(matches!(err, BookingError::InvalidInterval { .. }));
        assert_eq!(inv.reservations().count(), 0);
        assert_eq!(inv.room(RoomId(1)).unwrap().status, RoomStatus::Available);
    }

    #[test]
    fn test_full_lifecycle_to_check_out() {
        let (mut inv, id) = booked_inventory();

        check_in(&mut inv, id).unwrap();
        assert_eq!(inv.reservation(id).unwrap().status, ReservationStatus::CheckedIn);
        assert_eq!(inv.room(RoomId(1)).unwrap().status, RoomStatus::Occupied);

        inv.set_business_date(d("2026-02-04"));
        let settled = check_out(&mut inv, id).unwrap();
        assert_eq!(settled, 330.0);

        let reservation = inv.reservation(id).unwrap();
        assert_eq!(reservation.status, ReservationStatus::CheckedOut);
        assert_eq!(reservation.payment_status, PaymentStatus::Paid);
        assert_eq!(inv.room(RoomId(1)).unwrap().status, RoomStatus::Available);

        let ledger = inv.transactions_for(id);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].amount, 330.0);
        assert_eq!(ledger[0].description, FINAL_PAYMENT_DESCRIPTION);
        assert_eq!(ledger[0].recorded_on, d("2026-02-04"));
    }

    #[test]
    fn test_double_check_in_already_processed() {
        let (mut inv, id) = booked_inventory();
        check_in(&mut inv, id).unwrap();
        let err = check_in(&mut inv, id).unwrap_err();
        assert!(matches!(err, BookingError::AlreadyProcessed(_, ReservationStatus::CheckedIn)));
    }

    #[test]
    fn test_check_out_before_check_in_invalid_state() {
        let (mut inv, id) = booked_inventory();
        let err = check_out(&mut inv, id).unwrap_err();
        assert!(matches!(err, BookingError::InvalidState(_, ReservationStatus::Confirmed)));
        // No payment recorded on the failed transition
        assert!(inv.transactions_for(id).is_empty());
    }

    #[test]
    fn test_double_check_out_appends_single_payment() {
        let (mut inv, id) = booked_inventory();
        check_in(&mut inv, id).unwrap();
        check_out(&mut inv, id).unwrap();
        let err = check_out(&mut inv, id).unwrap_err();
        assert!(matches!(err, BookingError::AlreadyProcessed(_, ReservationStatus::CheckedOut)));
        assert_eq!(inv.transactions_for(id).len(), 1);
    }

    #[test]
    fn test_cancel_frees_room() {
        let (mut inv, id) = booked_inventory();
        cancel(&mut inv, id).unwrap();
        assert_eq!(inv.reservation(id).unwrap().status, ReservationStatus::Cancelled);
        assert_eq!(inv.room(RoomId(1)).unwrap().status, RoomStatus::Available);
    }

    #[test]
    fn test_cancel_after_check_in_invalid_state() {
        let (mut inv, id) = booked_inventory();
        check_in(&mut inv, id).unwrap();
        let err = cancel(&mut inv, id).unwrap_err();
        assert!(matches!(err, BookingError::InvalidState(_, ReservationStatus::CheckedIn)));
    }

    #[test]
    fn test_check_in_after_cancel_invalid_state() {
        let (mut inv, id) = booked_inventory();
        cancel(&mut inv, id).unwrap();
        let err = check_in(&mut inv, id).unwrap_err();
        assert!(matches!(err, BookingError::InvalidState(_, ReservationStatus::Cancelled)));
    }

    #[test]
    fn test_room_rebookable_after_cancellation() {
        let (mut inv, id) = booked_inventory();
        cancel(&mut inv, id).unwrap();
        let guest = inv.add_guest("Alex", "Nguyen");
        let again =
            create_reservation(&mut inv, guest, RoomId(1), d("2026-02-01"), d("2026-02-04"), TAX_RATE)
                .unwrap();
        assert_eq!(again.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_record_charge_requires_stay_in_progress() {
        let (mut inv, id) = booked_inventory();
        let err = record_charge(&mut inv, id, 45.0, "Room service").unwrap_err();
        assert!(matches!(err, BookingError::InvalidState(_, ReservationStatus::Confirmed)));

        check_in(&mut inv, id).unwrap();
        record_charge(&mut inv, id, 45.0, "Room service").unwrap();
        let ledger = inv.transactions_for(id);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].transaction_type, TransactionType::Charge);
        assert_eq!(ledger[0].amount, 45.0);
    }
}
