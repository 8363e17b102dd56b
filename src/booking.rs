use serde::{Deserialize, Serialize};
use std::fmt;

// A booking as entered on the form. Field order drives the derived ordering:
// name first, then phone, then description.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Booking {
    pub name: String,
    pub phone: String,
    pub description: String,
}

impl Booking {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.phone, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_name_then_phone_then_description() {
        let a = Booking::new("Alice", "0791111111", "Zoo");
        let b = Booking::new("Alice", "0792222222", "Aquarium");
        let c = Booking::new("Bob", "0780000000", "Aquarium");

        assert!(a < b, "phone breaks the tie on equal names");
        assert!(b < c, "name dominates the other fields");
        assert!(
            Booking::new("Alice", "0791111111", "A") < Booking::new("Alice", "0791111111", "B")
        );
    }

    #[test]
    fn test_display_and_json() {
        let booking = Booking::new("Marie", "0781234567", "Mount Bisoke hike");
        assert_eq!(booking.to_string(), "Marie (0781234567): Mount Bisoke hike");

        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"description\":\"Mount Bisoke hike\""));
    }
}
