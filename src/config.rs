// Demo scenario configuration
// Every section has defaults, so a config file only needs the values it overrides.
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, ValidationError};
use crate::feedback::validate_rating;
use crate::guest::non_negative_points;
use crate::guest_service::ServiceStatus;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub guest: GuestConfig,
    pub room: RoomConfig,
    pub booking: BookingConfig,
    pub invoice: InvoiceConfig,
    pub loyalty: LoyaltyConfig,
    pub feedback: FeedbackConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuestConfig {
    pub id: u32,
    pub name: String,
    pub contact: String,
}

impl Default for GuestConfig {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Shaikha Alkaabi".to_string(),
            contact: "Shaikha.j2005@gmail.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoomConfig {
    pub id: u32,
    pub room_type: String,
    pub amenities: Vec<String>,
    pub price_per_night: f64,
    pub available: bool,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            id: 101,
            room_type: "Double".to_string(),
            amenities: vec!["Free Breakfast".to_string(), "Swimming Pool".to_string()],
            price_per_night: 120.0,
            available: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    pub id: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            id: 1,
            check_in: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap_or_default(),
            check_out: NaiveDate::from_ymd_opt(2023, 5, 20).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvoiceConfig {
    pub id: u32,
    pub payment_method: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            id: 1,
            payment_method: "Credit Card".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoyaltyConfig {
    pub program_id: u32,
    pub points: i64,
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            program_id: 1,
            points: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedbackConfig {
    pub id: u32,
    pub rating: i64,
    pub comments: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            id: 1,
            rating: 5,
            comments: "Excellent stay. I loved it.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub id: u32,
    pub service_type: String,
    // Current time when absent
    pub request_time: Option<DateTime<Utc>>,
    pub status: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            id: 1,
            service_type: "Housekeeping".to_string(),
            request_time: None,
            status: ServiceStatus::InProgress.label().to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading demo config");
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    // Catches values the entity setters would reject before anything is built
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_rating(self.feedback.rating)?;
        self.service.status.parse::<ServiceStatus>()?;
        non_negative_points(self.loyalty.points)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults_describe_canonical_scenario() {
        let config = DemoConfig::default();
        assert_eq!(config.guest.name, "Shaikha Alkaabi");
        assert_eq!(config.room.price_per_night, 120.0);
        assert_eq!(
            config.booking.check_in,
            NaiveDate::from_ymd_opt(2023, 5, 15).unwrap()
        );
        assert_eq!(config.loyalty.points, 100);
        assert_eq!(config.service.status, "In Progress");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_given_fields() {
        let config = DemoConfig::from_json(
            r#"{
                "room": { "price_per_night": 95.5, "available": false },
                "service": { "request_time": "2023-05-16T09:30:00Z", "status": "Completed" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.room.price_per_night, 95.5);
        assert!(!config.room.available);
        assert_eq!(config.room.room_type, "Double");
        assert_eq!(
            config.service.request_time,
            Some(Utc.with_ymd_and_hms(2023, 5, 16, 9, 30, 0).unwrap())
        );
        assert_eq!(config.guest, GuestConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = DemoConfig::from_json(r#"{ "feedback": { "rating": 9 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ValidationError::RatingOutOfRange(9))
        ));

        let err = DemoConfig::from_json(r#"{ "service": { "status": "Bogus" } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ValidationError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_unknown_fields_and_bad_json_fail_to_parse() {
        assert!(matches!(
            DemoConfig::from_json(r#"{ "guest": { "nickname": "x" } }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DemoConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DemoConfig::from_path("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
