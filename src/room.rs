// Hotel rooms and their availability flag
use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    id: u32,
    room_type: String,
    amenities: Vec<String>,
    price_per_night: f64,
    available: bool,
}

impl Room {
    // Rooms start out available
    pub fn new(
        id: u32,
        room_type: impl Into<String>,
        amenities: Vec<String>,
        price_per_night: f64,
    ) -> Self {
        Self {
            id,
            room_type: room_type.into(),
            amenities,
            price_per_night,
            available: true,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn price_per_night(&self) -> f64 {
        self.price_per_night
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_availability(&mut self, available: bool) {
        debug!(room_id = self.id, available, "Room availability changed");
        self.available = available;
    }

    // Accepts untyped input (e.g. from a request body). Only JSON booleans are allowed.
    pub fn set_availability_value(&mut self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Bool(available) => {
                self.set_availability(*available);
                Ok(())
            }
            other => {
                let err = ValidationError::NonBooleanAvailability(other.to_string());
                warn!(room_id = self.id, "{}", err);
                Err(err)
            }
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room ID: {}, Type: {}, Amenities: {}, Price per Night: ${:.2}, Available: {}",
            self.id,
            self.room_type,
            self.amenities.join(", "),
            self.price_per_night,
            self.available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn sample_room() -> Room {
        Room::new(
            101,
            "Double",
            vec!["Free Breakfast".to_string(), "Swimming Pool".to_string()],
            120.0,
        )
    }

    #[test]
    fn test_new_room_is_available() {
        let room = sample_room();
        assert_eq!(room.id(), 101);
        assert_eq!(room.room_type(), "Double");
        assert_eq!(room.amenities(), ["Free Breakfast", "Swimming Pool"]);
        assert_eq!(room.price_per_night(), 120.0);
        assert!(room.is_available());
    }

    #[test]
    fn test_set_availability_toggles_flag() {
        let mut room = sample_room();
        room.set_availability(false);
        assert!(!room.is_available());
        room.set_availability(true);
        assert!(room.is_available());
    }

    #[test]
    fn test_boolean_value_is_accepted() {
        let mut room = sample_room();
        assert!(room.set_availability_value(&json!(false)).is_ok());
        assert!(!room.is_available());
    }

    #[test]
    fn test_true_value_makes_unavailable_room_available() {
        let mut room = sample_room();
        room.set_availability(false);

        assert_eq!(room.set_availability_value(&json!(true)), Ok(()));
        assert!(room.is_available());
    }

    #[test_case(json!("yes"); "string")]
    #[test_case(json!(1); "number")]
    #[test_case(json!(null); "null")]
    #[test_case(json!([true]); "array")]
    fn test_non_boolean_value_is_rejected(value: Value) {
        let mut room = sample_room();
        room.set_availability(false);

        let result = room.set_availability_value(&value);
        assert!(matches!(
            result,
            Err(ValidationError::NonBooleanAvailability(_))
        ));
        assert!(!room.is_available());
    }

    #[test]
    fn test_display_joins_amenities() {
        assert_eq!(
            sample_room().to_string(),
            "Room ID: 101, Type: Double, Amenities: Free Breakfast, Swimming Pool, Price per Night: $120.00, Available: true"
        );
    }
}
