// Error types shared by every hotel entity
use thiserror::Error;

// The single validation failure kind. Setters return it instead of mutating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    #[error("Loyalty points cannot be negative, got {0}")]
    NegativePoints(i64),

    #[error("Adding {points} loyalty points to a balance of {balance} would overflow")]
    PointsOverflow { balance: u64, points: u64 },

    #[error("Availability status must be a boolean (true or false), got {0}")]
    NonBooleanAvailability(String),

    #[error("Invalid status '{0}'. Must be 'Pending', 'In Progress', or 'Completed'")]
    InvalidStatus(String),

    #[error("Room {room_id} is not available for booking")]
    RoomUnavailable { room_id: u32 },
}

// Errors raised while loading a scenario configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(#[from] ValidationError),
}

// Errors that abort the demo scenario. Validation failures are collected instead.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
