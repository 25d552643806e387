// Main library file for the hotel management domain model

use std::sync::Arc;

use parking_lot::RwLock;

// Export modules for each entity of the hotel domain
pub mod booking;
pub mod config;
pub mod demo;
pub mod error;
pub mod feedback;
pub mod guest;
pub mod guest_service;
pub mod invoice;
pub mod loyalty_program;
pub mod room;

// Handle for entities referenced by several records. The creator owns the lifetime.
pub type Shared<T> = Arc<RwLock<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}

// Re-export key types for convenience
pub use booking::Booking;
pub use config::DemoConfig;
pub use demo::Scenario;
pub use error::{ConfigError, DemoError, ValidationError};
pub use feedback::Feedback;
pub use guest::Guest;
pub use guest_service::{GuestService, ServiceStatus};
pub use invoice::Invoice;
pub use loyalty_program::{LoyaltyProgram, PointsEarned};
pub use room::Room;
