//! Financial ledger entries
//!
//! Transactions are append-only: once written they are never mutated or
//! deleted. The sum of payments minus refunds for a reservation is its
//! realized revenue.

use crate::types::{ReservationId, TransactionId, TransactionType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An append-only ledger entry tied to a reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: TransactionId,
    /// Reservation the transaction settles against
    pub reservation_id: ReservationId,
    /// Amount in dollars, rounded to cents
    pub amount: f64,
    /// Category of the entry
    pub transaction_type: TransactionType,
    /// Business date the entry was recorded on
    pub recorded_on: NaiveDate,
    /// Human-readable description
    pub description: String,
}

impl Transaction {
    /// Signed contribution of this entry to realized revenue
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Payment | TransactionType::Charge => self.amount,
            TransactionType::Refund => -self.amount,
            TransactionType::Adjustment => self.amount,
        }
    }
}
