//! Hotel inventory: rooms, guests, reservations, and the financial ledger
//!
//! The [`Inventory`] store owns all records for one hotel and is the single
//! source of truth the booking state machine and the simulator operate on.

pub mod generator;
pub mod guest;
pub mod ledger;
pub mod reservation;
pub mod room;
pub mod store;

pub use generator::generate_inventory;
pub use guest::Guest;
pub use ledger::Transaction;
pub use reservation::{intervals_overlap, Reservation};
pub use room::Room;
pub use store::{Inventory, ReservationFilter, RoomFilter};
