//! Demand policies and guest identity generation
//!
//! Each simulated day, the scheduler rolls every demand policy once, in the
//! fixed order returned by [`demand_policies`]. A policy fires when a uniform
//! draw lands under its trigger probability; changing the evaluation order
//! changes how the shared random stream is consumed, so the order is part of
//! the reproducibility contract.

use crate::types::SimulationConfig;
use rand::seq::SliceRandom;
use rand::Rng;

/// Kind of daily booking demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandKind {
    /// Advance booking with a short lead time
    Standard,
    /// Same-day arrival without a prior reservation
    WalkIn,
    /// One party booking several rooms at once
    Group,
    /// Long stay of a week or more
    ExtendedStay,
    /// Loyalty-program member booking
    Loyalty,
}

/// One named source of booking demand
#[derive(Debug, Clone, Copy)]
pub struct DemandPolicy {
    /// Which demand source this is
    pub kind: DemandKind,
    /// Daily trigger probability, 0.0 to 1.0
    pub trigger: f64,
    /// Inclusive stay-length range in nights
    pub stay_nights: (u32, u32),
}

impl DemandPolicy {
    /// Roll the policy's daily trigger
    pub fn fires(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < self.trigger
    }

    /// Draw a stay length from the policy's range
    pub fn draw_nights(&self, rng: &mut impl Rng) -> u32 {
        let (min, max) = self.stay_nights;
        rng.gen_range(min..=max)
    }
}

/// The demand policies for a configuration, in daily evaluation order
///
/// Order: standard, walk-in, group, extended stay, loyalty.
pub fn demand_policies(config: &SimulationConfig) -> [DemandPolicy; 5] {
    [
        DemandPolicy {
            kind: DemandKind::Standard,
            trigger: config.standard_booking_probability,
            stay_nights: config.standard_stay_nights,
        },
        DemandPolicy {
            kind: DemandKind::WalkIn,
            trigger: config.walk_in_probability,
            stay_nights: config.walk_in_stay_nights,
        },
        DemandPolicy {
            kind: DemandKind::Group,
            trigger: config.group_booking_probability,
            stay_nights: config.group_stay_nights,
        },
        DemandPolicy {
            kind: DemandKind::ExtendedStay,
            trigger: config.extended_stay_probability,
            stay_nights: config.extended_stay_nights,
        },
        DemandPolicy {
            kind: DemandKind::Loyalty,
            trigger: config.loyalty_booking_probability,
            stay_nights: config.loyalty_stay_nights,
        },
    ]
}

const FIRST_NAMES: [&str; 40] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Carlos", "Sofia", "Wei", "Mei", "Hiroshi", "Yuki", "Ahmed", "Fatima", "Raj", "Priya",
    "Lars", "Ingrid", "Pierre", "Camille", "Diego", "Lucia", "Ivan", "Olga", "Kwame", "Amara",
    "Finn", "Aoife",
];

const LAST_NAMES: [&str; 32] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Chen", "Tanaka",
    "Kim", "Singh", "Hassan", "Okafor", "Novak", "Petrov", "Larsson", "Dubois", "Rossi", "Silva",
    "Nguyen", "Murphy", "Schmidt", "Kowalski",
];

/// Draw a random guest name from the fixed pools
pub fn draw_guest_name(rng: &mut impl Rng) -> (&'static str, &'static str) {
    // The pools are non-empty constants, so choose never returns None
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or(FIRST_NAMES[0]);
    let last = LAST_NAMES.choose(rng).copied().unwrap_or(LAST_NAMES[0]);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_policy_order_is_fixed() {
        let policies = demand_policies(&SimulationConfig::default());
        let kinds: Vec<_> = policies.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DemandKind::Standard,
                DemandKind::WalkIn,
                DemandKind::Group,
                DemandKind::ExtendedStay,
                DemandKind::Loyalty,
            ]
        );
    }

    #[test]
    fn test_policy_triggers_mirror_config() {
        let config = SimulationConfig { walk_in_probability: 0.75, ..Default::default() };
        let policies = demand_policies(&config);
        assert_eq!(policies[1].trigger, 0.75);
        assert_eq!(policies[3].stay_nights, (7, 14));
    }

    #[test]
    fn test_zero_trigger_never_fires() {
        let policy = DemandPolicy { kind: DemandKind::Standard, trigger: 0.0, stay_nights: (1, 7) };
        let mut rng = StdRng::seed_from_u64(3);
        assert!((0..1000).all(|_| !policy.fires(&mut rng)));
    }

    #[test]
    fn test_certain_trigger_always_fires() {
        let policy = DemandPolicy { kind: DemandKind::Standard, trigger: 1.0, stay_nights: (1, 7) };
        let mut rng = StdRng::seed_from_u64(3);
        assert!((0..1000).all(|_| policy.fires(&mut rng)));
    }

    #[test]
    fn test_nights_drawn_within_range() {
        let policy =
            DemandPolicy { kind: DemandKind::ExtendedStay, trigger: 1.0, stay_nights: (7, 14) };
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let nights = policy.draw_nights(&mut rng);
            assert!((7..=14).contains(&nights));
        }
    }

    #[test]
    fn test_name_draw_is_seeded() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        assert_eq!(draw_guest_name(&mut a), draw_guest_name(&mut b));
    }
}
