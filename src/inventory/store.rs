//! In-memory inventory store
//!
//! Holds all Room, Guest, Reservation, and Transaction records for one hotel,
//! keyed by integer identifiers. Multi-record writes go through [`Inventory::transact`],
//! which commits all-or-nothing: if the closure fails, every write it made is
//! rolled back.
//!
//! Reservation and room status fields are only writable from the booking
//! state machine (`crate::booking`); the store exposes those setters
//! `pub(crate)` so no external caller can update one without the other.

use crate::inventory::{Guest, Reservation, Room, Transaction};
use crate::types::{
    GuestId, HotelId, PaymentStatus, ReservationId, ReservationStatus, RoomId, RoomStatus,
    TransactionId, TransactionType,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Filter for room queries
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Restrict to a room category
    pub room_type: Option<String>,
    /// Restrict to a floor
    pub floor: Option<u32>,
    /// Restrict to a cached status
    pub status: Option<RoomStatus>,
}

impl RoomFilter {
    /// Whether the given room passes the filter
    pub fn matches(&self, room: &Room) -> bool {
        if let Some(room_type) = &self.room_type {
            if &room.room_type != room_type {
                return false;
            }
        }
        if let Some(floor) = self.floor {
            if room.floor != floor {
                return false;
            }
        }
        if let Some(status) = self.status {
            if room.status != status {
                return false;
            }
        }
        true
    }
}

/// Filter for reservation queries
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Restrict to a lifecycle status
    pub status: Option<ReservationStatus>,
    /// Restrict to one room
    pub room_id: Option<RoomId>,
    /// Check-in date equals this date
    pub check_in_on: Option<NaiveDate>,
    /// Check-out date equals this date
    pub check_out_on: Option<NaiveDate>,
    /// Check-in date strictly after this date
    pub check_in_after: Option<NaiveDate>,
    /// Check-out date on or after this date
    pub check_out_on_or_after: Option<NaiveDate>,
}

impl ReservationFilter {
    /// Whether the given reservation passes the filter
    pub fn matches(&self, reservation: &Reservation) -> bool {
        if let Some(status) = self.status {
            if reservation.status != status {
                return false;
            }
        }
        if let Some(room_id) = self.room_id {
            if reservation.room_id != room_id {
                return false;
            }
        }
        if let Some(date) = self.check_in_on {
            if reservation.check_in != date {
                return false;
            }
        }
        if let Some(date) = self.check_out_on {
            if reservation.check_out != date {
                return false;
            }
        }
        if let Some(date) = self.check_in_after {
            if reservation.check_in <= date {
                return false;
            }
        }
        if let Some(date) = self.check_out_on_or_after {
            if reservation.check_out < date {
                return false;
            }
        }
        true
    }
}

/// In-memory inventory store for a single hotel
///
/// Iteration over records is in ascending id order (BTreeMap), which keeps
/// simulation runs reproducible for a given seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    hotel_id: HotelId,
    hotel_name: String,
    business_date: NaiveDate,
    rooms: BTreeMap<RoomId, Room>,
    guests: BTreeMap<GuestId, Guest>,
    reservations: BTreeMap<ReservationId, Reservation>,
    transactions: Vec<Transaction>,
    next_room_id: u32,
    next_guest_id: u32,
    next_reservation_id: u32,
    next_transaction_id: u32,
}

impl Inventory {
    /// Create an empty inventory for the given hotel
    pub fn new(hotel_id: HotelId, hotel_name: impl Into<String>, business_date: NaiveDate) -> Self {
        Self {
            hotel_id,
            hotel_name: hotel_name.into(),
            business_date,
            rooms: BTreeMap::new(),
            guests: BTreeMap::new(),
            reservations: BTreeMap::new(),
            transactions: Vec::new(),
            next_room_id: 1,
            next_guest_id: 1,
            next_reservation_id: 1,
            next_transaction_id: 1,
        }
    }

    /// Id of the hotel this inventory belongs to
    pub fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }

    /// Display name of the hotel
    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    /// Current business date used to stamp new records
    pub fn business_date(&self) -> NaiveDate {
        self.business_date
    }

    /// Advance the business date; called by the scheduler once per simulated day
    pub fn set_business_date(&mut self, date: NaiveDate) {
        self.business_date = date;
    }

    // ---- rooms -----------------------------------------------------------

    /// Add a room to the inventory, returning its assigned id
    pub fn add_room(
        &mut self,
        floor: u32,
        room_number: impl Into<String>,
        room_type: impl Into<String>,
        price_per_night: f64,
        max_occupancy: u32,
    ) -> RoomId {
        let id = RoomId(self.next_room_id);
        self.next_room_id += 1;
        let room =
            Room::new(id, self.hotel_id, floor, room_number, room_type, price_per_night, max_occupancy);
        self.rooms.insert(id, room);
        id
    }

    /// Look up a room by id
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Iterate all rooms in ascending id order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Query rooms matching the filter
    pub fn query_rooms(&self, filter: &RoomFilter) -> Vec<&Room> {
        self.rooms.values().filter(|r| filter.matches(r)).collect()
    }

    /// Total number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Room counts grouped by cached status
    pub fn rooms_by_status(&self) -> BTreeMap<RoomStatus, usize> {
        let mut counts = BTreeMap::new();
        for room in self.rooms.values() {
            *counts.entry(room.status).or_insert(0) += 1;
        }
        counts
    }

    /// Occupancy rate as a percentage, rounded to 2 decimals
    ///
    /// Occupied and reserved rooms both count toward occupancy.
    pub fn occupancy_rate(&self) -> f64 {
        if self.rooms.is_empty() {
            return 0.0;
        }
        let held = self.rooms.values().filter(|r| r.is_occupied_or_held()).count();
        let rate = held as f64 / self.rooms.len() as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    }

    /// Take an available room out of service, or return it to service
    ///
    /// Maintenance is the only room-status change not driven by a reservation
    /// transition. A room can only enter maintenance from `Available` and only
    /// leave it back to `Available`; returns false otherwise.
    pub fn set_maintenance(&mut self, id: RoomId, under_maintenance: bool) -> bool {
        match self.rooms.get_mut(&id) {
            Some(room) if under_maintenance && room.status == RoomStatus::Available => {
                room.status = RoomStatus::Maintenance;
                true
            }
            Some(room) if !under_maintenance && room.status == RoomStatus::Maintenance => {
                room.status = RoomStatus::Available;
                true
            }
            _ => false,
        }
    }

    /// Write the cached room status; reservation-transition side effect only
    pub(crate) fn set_room_status(&mut self, id: RoomId, status: RoomStatus) -> bool {
        match self.rooms.get_mut(&id) {
            Some(room) => {
                debug!(room = %id, from = %room.status, to = %status, "room status updated");
                room.status = status;
                true
            }
            None => false,
        }
    }

    // ---- guests ----------------------------------------------------------

    /// Add a guest with the required name fields, returning the assigned id
    pub fn add_guest(&mut self, first_name: &str, last_name: &str) -> GuestId {
        let id = GuestId(self.next_guest_id);
        self.next_guest_id += 1;
        self.guests.insert(id, Guest::new(id, first_name, last_name));
        id
    }

    /// Look up a guest by id
    pub fn guest(&self, id: GuestId) -> Option<&Guest> {
        self.guests.get(&id)
    }

    /// Mutable access to a guest for contact-detail updates
    pub fn guest_mut(&mut self, id: GuestId) -> Option<&mut Guest> {
        self.guests.get_mut(&id)
    }

    /// Total number of guests on file
    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    // ---- reservations ----------------------------------------------------

    /// Insert a new confirmed reservation; state-machine use only
    pub(crate) fn insert_reservation(
        &mut self,
        room_id: RoomId,
        guest_id: GuestId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_price: f64,
    ) -> ReservationId {
        let id = ReservationId(self.next_reservation_id);
        self.next_reservation_id += 1;
        self.reservations.insert(
            id,
            Reservation {
                id,
                room_id,
                guest_id,
                check_in,
                check_out,
                status: ReservationStatus::Confirmed,
                total_price,
                booked_on: self.business_date,
                payment_status: PaymentStatus::Pending,
            },
        );
        id
    }

    /// Look up a reservation by id
    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.get(&id)
    }

    /// Iterate all reservations in ascending id order
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    /// Query reservations matching the filter, in ascending id order
    pub fn query_reservations(&self, filter: &ReservationFilter) -> Vec<&Reservation> {
        self.reservations.values().filter(|r| filter.matches(r)).collect()
    }

    /// Write the reservation lifecycle status; state-machine use only
    pub(crate) fn set_reservation_status(&mut self, id: ReservationId, status: ReservationStatus) -> bool {
        match self.reservations.get_mut(&id) {
            Some(reservation) => {
                debug!(reservation = %id, from = %reservation.status, to = %status, "reservation status updated");
                reservation.status = status;
                true
            }
            None => false,
        }
    }

    /// Write the payment status; state-machine use only
    pub(crate) fn set_payment_status(&mut self, id: ReservationId, status: PaymentStatus) -> bool {
        match self.reservations.get_mut(&id) {
            Some(reservation) => {
                reservation.payment_status = status;
                true
            }
            None => false,
        }
    }

    // ---- transactions ----------------------------------------------------

    /// Append a ledger entry stamped with the current business date
    pub(crate) fn append_transaction(
        &mut self,
        reservation_id: ReservationId,
        amount: f64,
        transaction_type: TransactionType,
        description: impl Into<String>,
    ) -> TransactionId {
        let id = TransactionId(self.next_transaction_id);
        self.next_transaction_id += 1;
        self.transactions.push(Transaction {
            id,
            reservation_id,
            amount,
            transaction_type,
            recorded_on: self.business_date,
            description: description.into(),
        });
        id
    }

    /// All ledger entries in the order they were appended
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Ledger entries for one reservation
    pub fn transactions_for(&self, reservation_id: ReservationId) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.reservation_id == reservation_id).collect()
    }

    // ---- atomic commit unit ----------------------------------------------

    /// Run a multi-write operation as one all-or-nothing unit
    ///
    /// If the closure returns an error, every write it performed is rolled
    /// back and the store is left exactly as it was before the call.
    pub fn transact<T, E>(
        &mut self,
        f: impl FnOnce(&mut Inventory) -> Result<T, E>,
    ) -> Result<T, E> {
        let snapshot = self.clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self = snapshot;
                Err(err)
            }
        }
    }
}
