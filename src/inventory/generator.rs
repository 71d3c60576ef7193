//! Seeded inventory generation
//!
//! Builds a fresh hotel inventory from the simulation configuration. Room
//! categories are drawn from a fixed weighted table, so two runs with the same
//! seed produce identical inventories.

use crate::inventory::Inventory;
use crate::types::{HotelId, SimulationConfig};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::info;

/// Room category table: name, nightly rate, max occupancy, draw weight
const ROOM_TYPES: [(&str, f64, u32, f64); 3] = [
    ("Standard", 120.0, 2, 0.5),
    ("Deluxe", 180.0, 3, 0.3),
    ("Suite", 300.0, 4, 0.2),
];

/// Default display name for the generated hotel
const HOTEL_NAME: &str = "Grand Plaza Hotel";

/// Generate a seeded inventory per the configuration
///
/// Rooms are spread round-robin across `total_floors` floors and numbered
/// `floor * 100 + position`, so floor 2 holds 201, 202, and so on. Every room
/// starts `Available`. A zero floor count is treated as a single floor, so an
/// unvalidated configuration cannot panic here.
pub fn generate_inventory(config: &SimulationConfig, rng: &mut impl Rng) -> Inventory {
    let mut inventory = Inventory::new(HotelId(1), HOTEL_NAME, config.start_date);

    let weights = WeightedIndex::new(ROOM_TYPES.iter().map(|(_, _, _, w)| *w))
        .expect("room type weights are positive");

    let floors = config.total_floors.max(1);
    for i in 0..config.total_rooms {
        let floor = (i % floors) as u32 + 1;
        let position = (i / floors) as u32 + 1;
        let room_number = format!("{}", floor * 100 + position);

        let (room_type, rate, occupancy, _) = ROOM_TYPES[weights.sample(rng)];
        inventory.add_room(floor, room_number, room_type, rate, occupancy);
    }

    info!(
        rooms = inventory.room_count(),
        floors,
        start_date = %config.start_date,
        "inventory generated"
    );

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_requested_room_count() {
        let config = SimulationConfig { total_rooms: 20, total_floors: 4, ..Default::default() };
        let mut rng = StdRng::seed_from_u64(1);
        let inv = generate_inventory(&config, &mut rng);
        assert_eq!(inv.room_count(), 20);
        assert!(inv.rooms().all(|r| r.is_available()));
    }

    #[test]
    fn test_room_numbers_follow_floor_scheme() {
        let config = SimulationConfig { total_rooms: 6, total_floors: 3, ..Default::default() };
        let mut rng = StdRng::seed_from_u64(1);
        let inv = generate_inventory(&config, &mut rng);
        let numbers: Vec<_> = inv.rooms().map(|r| r.room_number.as_str()).collect();
        assert_eq!(numbers, vec!["101", "201", "301", "102", "202", "302"]);
        assert!(inv.rooms().all(|r| r.floor >= 1 && r.floor <= 3));
    }

    #[test]
    fn test_same_seed_same_inventory() {
        let config = SimulationConfig { total_rooms: 50, ..Default::default() };
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = generate_inventory(&config, &mut rng_a);
        let b = generate_inventory(&config, &mut rng_b);
        let types_a: Vec<_> = a.rooms().map(|r| r.room_type.clone()).collect();
        let types_b: Vec<_> = b.rooms().map(|r| r.room_type.clone()).collect();
        assert_eq!(types_a, types_b);
    }

    #[test]
    fn test_zero_floors_collapses_to_one() {
        let config = SimulationConfig { total_rooms: 4, total_floors: 0, ..Default::default() };
        let mut rng = StdRng::seed_from_u64(1);
        let inv = generate_inventory(&config, &mut rng);
        assert_eq!(inv.room_count(), 4);
        assert!(inv.rooms().all(|r| r.floor == 1));
        let numbers: Vec<_> = inv.rooms().map(|r| r.room_number.as_str()).collect();
        assert_eq!(numbers, vec!["101", "102", "103", "104"]);
    }

    #[test]
    fn test_room_rates_match_category_table() {
        let config = SimulationConfig { total_rooms: 40, ..Default::default() };
        let mut rng = StdRng::seed_from_u64(7);
        let inv = generate_inventory(&config, &mut rng);
        for room in inv.rooms() {
            let expected = match room.room_type.as_str() {
                "Standard" => 120.0,
                "Deluxe" => 180.0,
                "Suite" => 300.0,
                other => panic!("unexpected room type {other}"),
            };
            assert_eq!(room.price_per_night, expected);
        }
    }
}
