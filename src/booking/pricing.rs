//! Stay pricing
//!
//! A stay's total is nights times the room's nightly rate, plus tax, rounded
//! to cents. The check-out date is exclusive, so a 3-night quote on a $100
//! room comes to $330.00 at the default 10% tax rate.

use crate::booking::BookingError;
use crate::inventory::Room;
use chrono::NaiveDate;

/// Default tax rate applied on top of the nightly subtotal
pub const TAX_RATE: f64 = 0.10;

/// Round a dollar amount to cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Quote the total price for a stay in the given room
///
/// Rejects intervals of zero or negative length with
/// [`BookingError::InvalidInterval`].
pub fn quote(
    room: &Room,
    check_in: NaiveDate,
    check_out: NaiveDate,
    tax_rate: f64,
) -> Result<f64, BookingError> {
    let nights = (check_out - check_in).num_days();
    if nights < 1 {
        return Err(BookingError::InvalidInterval { check_in, check_out });
    }
    Ok(round_cents(nights as f64 * room.price_per_night * (1.0 + tax_rate)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HotelId, RoomId};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn room(rate: f64) -> Room {
        Room::new(RoomId(1), HotelId(1), 1, "101", "Standard", rate, 2)
    }

    #[test]
    fn test_three_night_quote_with_tax() {
        let total = quote(&room(100.0), d("2026-02-01"), d("2026-02-04"), TAX_RATE).unwrap();
        assert_eq!(total, 330.0);
    }

    #[test]
    fn test_single_night_quote() {
        let total = quote(&room(180.0), d("2026-02-01"), d("2026-02-02"), TAX_RATE).unwrap();
        assert_eq!(total, 198.0);
    }

    #[test]
    fn test_zero_night_interval_rejected() {
        let err = quote(&room(100.0), d("2026-02-01"), d("2026-02-01"), TAX_RATE).unwrap_err();
        assert!(matches!(err, BookingError::InvalidInterval { .. }));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let err = quote(&room(100.0), d("2026-02-04"), d("2026-02-01"), TAX_RATE).unwrap_err();
        assert!(matches!(err, BookingError::InvalidInterval { .. }));
    }

    #[test]
    fn test_quote_rounds_to_cents() {
        // 3 nights at $33.33 plus 10% tax = 109.989 -> 109.99
        let total = quote(&room(33.33), d("2026-02-01"), d("2026-02-04"), TAX_RATE).unwrap();
        assert_eq!(total, 109.99);
    }
}
