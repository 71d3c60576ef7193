//! Guest records

use crate::types::GuestId;
use serde::{Deserialize, Serialize};

/// Represents a hotel guest
///
/// Name fields are required; contact and vehicle details are optional and may
/// be updated after creation. Everything else is immutable once a reservation
/// references the guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// Unique identifier for the guest
    pub id: GuestId,
    /// Guest's first name
    pub first_name: String,
    /// Guest's last name
    pub last_name: String,
    /// Contact email, if known
    pub email: Option<String>,
    /// Contact phone number, if known
    pub phone: Option<String>,
    /// Postal address, if known
    pub address: Option<String>,
    /// Registered vehicle plate, if the guest parked a car
    pub vehicle_plate: Option<String>,
    /// Accumulated loyalty points
    pub loyalty_points: u32,
}

impl Guest {
    /// Create a new guest with the required name fields
    pub fn new(id: GuestId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            address: None,
            vehicle_plate: None,
            loyalty_points: 0,
        }
    }

    /// Set the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the contact phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_creation() {
        let guest = Guest::new(GuestId(1), "Jane", "Smith").with_email("jane@example.com");
        assert_eq!(guest.full_name(), "Jane Smith");
        assert_eq!(guest.email.as_deref(), Some("jane@example.com"));
        assert!(guest.phone.is_none());
        assert_eq!(guest.loyalty_points, 0);
    }
}
