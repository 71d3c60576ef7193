//! Day-stepped simulation engine
//!
//! Drives the booking state machine through simulated days. Each day runs the
//! same fixed sequence: due check-ins, due check-outs, the demand policies in
//! order, special requests, the cancellation sweep, then the occupancy
//! rollup. All randomness flows through one seeded generator, so a given seed
//! and configuration reproduce the run exactly.
//!
//! Booking rejections during a day (no free room, lost race on a room) are
//! skipped trials: they are logged at debug level and consume no counters.

use crate::booking;
use crate::inventory::{Inventory, ReservationFilter, RoomFilter};
use crate::simulation::clock::{
    SimulationClock, TimeWindow, BOOKING_WINDOW, CHECK_IN_WINDOW, CHECK_OUT_WINDOW, GROUP_WINDOW,
    OFFICE_WINDOW, WALK_IN_WINDOW,
};
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::event::SimulationEvent;
use crate::simulation::policies::{demand_policies, draw_guest_name, DemandKind, DemandPolicy};
use crate::simulation::results::SimulationResults;
use crate::types::{
    special_request_fees, GuestId, HotelId, ReservationId, ReservationStatus, RoomId,
    SimEventType, SimulationConfig,
};
use chrono::Duration;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Special request menu: description and flat fee
const SPECIAL_REQUESTS: [(&str, f64); 4] = [
    ("Room upgrade", special_request_fees::UPGRADE),
    ("Late checkout", special_request_fees::LATE_CHECKOUT),
    ("Extra amenities", special_request_fees::EXTRA_AMENITIES),
    ("Room service", special_request_fees::ROOM_SERVICE),
];

/// Drives one hotel inventory through simulated days
#[derive(Debug)]
pub struct SimulationEngine<'a> {
    inventory: &'a mut Inventory,
    config: SimulationConfig,
    clock: SimulationClock,
    rng: StdRng,
    guest_sequence: u32,
}

impl<'a> SimulationEngine<'a> {
    /// Create an engine over the given inventory
    ///
    /// Validates the configuration and seeds the random stream. Without a
    /// configured seed, the stream is seeded from entropy and the run is not
    /// reproducible.
    pub fn new(
        inventory: &'a mut Inventory,
        config: SimulationConfig,
    ) -> SimulationResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let clock = SimulationClock::new(config.start_date);
        Ok(Self { inventory, config, clock, rng, guest_sequence: 0 })
    }

    /// Run the configured number of days and return the accumulated results
    pub fn run(&mut self) -> SimulationResult<SimulationResults> {
        info!(
            days = self.config.days,
            seed = ?self.config.seed,
            rooms = self.inventory.room_count(),
            start = %self.config.start_date,
            "simulation starting"
        );

        let mut results = SimulationResults::new();
        for _ in 0..self.config.days {
            self.step_day(&mut results);
        }
        results.finalize();

        info!(
            reservations = results.total_reservations,
            revenue = results.total_revenue,
            occupancy = results.occupancy_rate,
            "simulation finished"
        );
        Ok(results)
    }

    /// Advance one day and process its full event sequence
    ///
    /// The sub-step order is fixed and part of the reproducibility contract.
    pub fn step_day(&mut self, results: &mut SimulationResults) {
        let (day, date) = self.clock.advance();
        self.inventory.set_business_date(date);
        debug!(day, %date, "simulating day");

        self.process_due_check_ins(results);
        self.process_due_check_outs(results);

        for policy in demand_policies(&self.config) {
            if !policy.fires(&mut self.rng) {
                continue;
            }
            match policy.kind {
                DemandKind::Group => self.book_group(&policy, results),
                _ => self.book_single(&policy, results),
            }
        }

        self.process_special_requests(results);
        self.process_cancellations(results);

        results.record_day(self.inventory.occupancy_rate());
    }

    /// Check in every confirmed reservation whose stay starts today
    fn process_due_check_ins(&mut self, results: &mut SimulationResults) {
        let date = self.clock.current_date();
        let due: Vec<ReservationId> = self
            .inventory
            .query_reservations(&ReservationFilter {
                status: Some(ReservationStatus::Confirmed),
                check_in_on: Some(date),
                ..Default::default()
            })
            .iter()
            .map(|r| r.id)
            .collect();

        for id in due {
            match booking::check_in(self.inventory, id) {
                Ok(reservation) => {
                    let event = self.event(
                        SimEventType::CheckIn,
                        &CHECK_IN_WINDOW,
                        self.describe_guest_action(reservation.guest_id, reservation.room_id, "checked in to"),
                        0.0,
                        Some(reservation.guest_id),
                        self.room_number(reservation.room_id),
                        Some(id),
                    );
                    results.push_event(event);
                }
                Err(err) => debug!(reservation = %id, %err, "check-in skipped"),
            }
        }
    }

    /// Check out every in-house reservation whose stay ends today
    fn process_due_check_outs(&mut self, results: &mut SimulationResults) {
        let date = self.clock.current_date();
        let due: Vec<ReservationId> = self
            .inventory
            .query_reservations(&ReservationFilter {
                status: Some(ReservationStatus::CheckedIn),
                check_out_on: Some(date),
                ..Default::default()
            })
            .iter()
            .map(|r| r.id)
            .collect();

        for id in due {
            let details = self.inventory.reservation(id).map(|r| (r.guest_id, r.room_id));
            match booking::check_out(self.inventory, id) {
                Ok(amount) => {
                    results.total_revenue += amount;
                    let (guest_id, room_id) = match details {
                        Some(pair) => pair,
                        None => continue,
                    };
                    let event = self.event(
                        SimEventType::CheckOut,
                        &CHECK_OUT_WINDOW,
                        self.describe_guest_action(guest_id, room_id, "checked out of"),
                        amount,
                        Some(guest_id),
                        self.room_number(room_id),
                        Some(id),
                    );
                    results.push_event(event);
                }
                Err(err) => debug!(reservation = %id, %err, "check-out skipped"),
            }
        }
    }

    /// Handle a single-room demand policy that fired today
    fn book_single(&mut self, policy: &DemandPolicy, results: &mut SimulationResults) {
        let today = self.clock.current_date();
        let nights = policy.draw_nights(&mut self.rng);
        let lead_days = match policy.kind {
            // Walk-ins arrive without notice and stay starting tonight
            DemandKind::WalkIn => 0,
            _ => self.rng.gen_range(1..=7),
        };
        let check_in = today + Duration::days(lead_days);
        let check_out = check_in + Duration::days(i64::from(nights));

        let candidates: Vec<_> =
            booking::find_available(self.inventory, &RoomFilter::default(), check_in, check_out)
                .iter()
                .map(|room| room.id)
                .collect();
        let room_id = match candidates.choose(&mut self.rng) {
            Some(&id) => id,
            None => {
                debug!(kind = ?policy.kind, %check_in, %check_out, "no rooms free, booking skipped");
                return;
            }
        };

        let (prefix, event_type, window) = match policy.kind {
            DemandKind::Standard => ("guest", SimEventType::NewReservation, &BOOKING_WINDOW),
            DemandKind::WalkIn => ("walkin", SimEventType::WalkInBooking, &WALK_IN_WINDOW),
            DemandKind::ExtendedStay => ("extended", SimEventType::ExtendedStay, &OFFICE_WINDOW),
            DemandKind::Loyalty => ("loyalty", SimEventType::LoyaltyBooking, &OFFICE_WINDOW),
            DemandKind::Group => return,
        };
        let guest_id = self.new_guest(prefix);

        let reservation = match booking::create_reservation(
            self.inventory,
            guest_id,
            room_id,
            check_in,
            check_out,
            self.config.tax_rate,
        ) {
            Ok(reservation) => reservation,
            Err(err) => {
                debug!(kind = ?policy.kind, room = %room_id, %err, "booking skipped");
                return;
            }
        };

        results.total_guests += 1;
        results.total_reservations += 1;
        let amount = match policy.kind {
            DemandKind::WalkIn => {
                results.total_walk_ins += 1;
                reservation.total_price
            }
            DemandKind::ExtendedStay => {
                results.total_extended_stays += 1;
                reservation.total_price
            }
            DemandKind::Loyalty => {
                results.total_loyalty_bookings += 1;
                // The discount only shows on the reported amount; the stored
                // reservation keeps the full price and check-out settles it.
                // TODO: apply the loyalty discount to total_price at creation
                // so the ledger and the event log agree.
                booking::round_cents(reservation.total_price * (1.0 - self.config.loyalty_discount))
            }
            _ => reservation.total_price,
        };

        let description = format!(
            "{} booked room {} for {} night(s)",
            self.guest_name(guest_id),
            self.room_number(reservation.room_id).unwrap_or_default(),
            nights
        );
        let event = self.event(
            event_type,
            window,
            description,
            amount,
            Some(guest_id),
            self.room_number(reservation.room_id),
            Some(reservation.id),
        );
        results.push_event(event);

        if policy.kind == DemandKind::WalkIn {
            // Walk-ins occupy their room the moment the booking lands
            match booking::check_in(self.inventory, reservation.id) {
                Ok(checked_in) => {
                    let event = self.event(
                        SimEventType::CheckIn,
                        &CHECK_IN_WINDOW,
                        self.describe_guest_action(
                            checked_in.guest_id,
                            checked_in.room_id,
                            "checked in to",
                        ),
                        0.0,
                        Some(checked_in.guest_id),
                        self.room_number(checked_in.room_id),
                        Some(reservation.id),
                    );
                    results.push_event(event);
                }
                Err(err) => {
                    debug!(reservation = %reservation.id, %err, "walk-in check-in skipped")
                }
            }
        }
    }

    /// Handle a group booking that fired today
    ///
    /// Groups book several rooms under one leader guest for the same stay.
    /// When fewer than the minimum group size is free, the party goes
    /// elsewhere and the day records nothing.
    fn book_group(&mut self, policy: &DemandPolicy, results: &mut SimulationResults) {
        let today = self.clock.current_date();
        let (min_rooms, max_rooms) = self.config.group_rooms;
        let party_size = self.rng.gen_range(min_rooms..=max_rooms);
        let nights = policy.draw_nights(&mut self.rng);
        let lead_days = self.rng.gen_range(1..=7);
        let check_in = today + Duration::days(lead_days);
        let check_out = check_in + Duration::days(i64::from(nights));

        let candidates: Vec<_> =
            booking::find_available(self.inventory, &RoomFilter::default(), check_in, check_out)
                .iter()
                .map(|room| room.id)
                .collect();
        if candidates.len() < min_rooms {
            debug!(free = candidates.len(), needed = min_rooms, "group booking skipped");
            return;
        }
        let chosen: Vec<_> = candidates
            .choose_multiple(&mut self.rng, party_size.min(candidates.len()))
            .copied()
            .collect();

        let leader = self.new_guest("group");
        let mut total = 0.0;
        let mut room_numbers = Vec::new();
        let mut booked = 0u32;
        for room_id in chosen {
            match booking::create_reservation(
                self.inventory,
                leader,
                room_id,
                check_in,
                check_out,
                self.config.tax_rate,
            ) {
                Ok(reservation) => {
                    total += reservation.total_price;
                    if let Some(number) = self.room_number(room_id) {
                        room_numbers.push(number);
                    }
                    booked += 1;
                }
                Err(err) => debug!(room = %room_id, %err, "group room skipped"),
            }
        }
        if booked == 0 {
            return;
        }

        results.total_reservations += booked;
        // The whole party counts as guests even though one leader books
        results.total_guests += booked;
        results.total_group_bookings += 1;

        let description = format!(
            "Group of {} led by {} booked {} room(s) for {} night(s)",
            booked,
            self.guest_name(leader),
            booked,
            nights
        );
        let event = self.event(
            SimEventType::GroupBooking,
            &GROUP_WINDOW,
            description,
            booking::round_cents(total),
            Some(leader),
            Some(room_numbers.join(", ")),
            None,
        );
        results.push_event(event);
    }

    /// Roll for one ancillary special request from an in-house guest
    fn process_special_requests(&mut self, results: &mut SimulationResults) {
        if self.rng.gen::<f64>() >= self.config.special_request_probability {
            return;
        }
        let in_house: Vec<_> = self
            .inventory
            .query_reservations(&ReservationFilter {
                status: Some(ReservationStatus::CheckedIn),
                ..Default::default()
            })
            .iter()
            .map(|r| (r.id, r.guest_id, r.room_id))
            .collect();
        let &(reservation_id, guest_id, room_id) = match in_house.choose(&mut self.rng) {
            Some(pick) => pick,
            None => return,
        };
        let &(description, fee) = match SPECIAL_REQUESTS.choose(&mut self.rng) {
            Some(pick) => pick,
            None => return,
        };

        match booking::record_charge(self.inventory, reservation_id, fee, description) {
            Ok(_) => {
                results.total_special_requests += 1;
                results.ancillary_revenue += fee;
                results.total_revenue += fee;
                let event = self.event(
                    SimEventType::SpecialRequest,
                    &OFFICE_WINDOW,
                    format!("{} for {}", description, self.guest_name(guest_id)),
                    fee,
                    Some(guest_id),
                    self.room_number(room_id),
                    Some(reservation_id),
                );
                results.push_event(event);
            }
            Err(err) => debug!(reservation = %reservation_id, %err, "special request skipped"),
        }
    }

    /// Roll each future confirmed reservation for cancellation
    fn process_cancellations(&mut self, results: &mut SimulationResults) {
        let today = self.clock.current_date();
        let future: Vec<_> = self
            .inventory
            .query_reservations(&ReservationFilter {
                status: Some(ReservationStatus::Confirmed),
                check_in_after: Some(today),
                ..Default::default()
            })
            .iter()
            .map(|r| (r.id, r.guest_id, r.room_id))
            .collect();

        for (id, guest_id, room_id) in future {
            if self.rng.gen::<f64>() >= self.config.cancellation_probability {
                continue;
            }
            match booking::cancel(self.inventory, id) {
                Ok(_) => {
                    results.total_cancellations += 1;
                    let event = self.event(
                        SimEventType::Cancellation,
                        &OFFICE_WINDOW,
                        format!("{} cancelled their reservation", self.guest_name(guest_id)),
                        0.0,
                        Some(guest_id),
                        self.room_number(room_id),
                        Some(id),
                    );
                    results.push_event(event);
                }
                Err(err) => debug!(reservation = %id, %err, "cancellation skipped"),
            }
        }
    }

    /// Create a guest with a drawn name and a sequenced contact email
    fn new_guest(&mut self, email_prefix: &str) -> GuestId {
        let (first, last) = draw_guest_name(&mut self.rng);
        self.guest_sequence += 1;
        let email = format!("{}{}@example.com", email_prefix, self.guest_sequence);
        let id = self.inventory.add_guest(first, last);
        if let Some(guest) = self.inventory.guest_mut(id) {
            guest.email = Some(email);
        }
        id
    }

    fn event(
        &mut self,
        event_type: SimEventType,
        window: &TimeWindow,
        description: String,
        amount: f64,
        guest_id: Option<GuestId>,
        room_number: Option<String>,
        reservation_id: Option<ReservationId>,
    ) -> SimulationEvent {
        SimulationEvent {
            day: self.clock.day(),
            date: self.clock.current_date(),
            time: window.sample(&mut self.rng),
            event_type,
            description,
            amount,
            guest_id,
            room_number,
            reservation_id,
        }
    }

    fn guest_name(&self, id: GuestId) -> String {
        self.inventory.guest(id).map(|g| g.full_name()).unwrap_or_else(|| id.to_string())
    }

    fn room_number(&self, id: RoomId) -> Option<String> {
        self.inventory.room(id).map(|r| r.room_number.clone())
    }

    fn describe_guest_action(
        &self,
        guest_id: GuestId,
        room_id: RoomId,
        action: &str,
    ) -> String {
        format!(
            "{} {} room {}",
            self.guest_name(guest_id),
            action,
            self.room_number(room_id).unwrap_or_default()
        )
    }
}

/// Run a full simulation against the inventory of the given hotel
pub fn run_simulation(
    config: &SimulationConfig,
    inventory: &mut Inventory,
    hotel_id: HotelId,
) -> SimulationResult<SimulationResults> {
    if inventory.hotel_id() != hotel_id {
        return Err(SimulationError::UnknownHotel(hotel_id));
    }
    let mut engine = SimulationEngine::new(inventory, config.clone())?;
    engine.run()
}
