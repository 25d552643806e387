// Guest service requests (housekeeping, room service, ...)
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ValidationError;

pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Any status may follow any other; there is no enforced ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 3] = [
        ServiceStatus::Pending,
        ServiceStatus::InProgress,
        ServiceStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "Pending",
            ServiceStatus::InProgress => "In Progress",
            ServiceStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| ValidationError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuestService {
    id: u32,
    service_type: String,
    request_time: DateTime<Utc>,
    status: ServiceStatus,
}

impl GuestService {
    pub fn new(id: u32, service_type: impl Into<String>, request_time: DateTime<Utc>) -> Self {
        Self {
            id,
            service_type: service_type.into(),
            request_time,
            status: ServiceStatus::default(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn request_time(&self) -> DateTime<Utc> {
        self.request_time
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    // Only the three status labels are accepted, exact spelling and case.
    pub fn set_status(&mut self, status: &str) -> Result<(), ValidationError> {
        match status.parse() {
            Ok(status) => {
                self.update_status(status);
                Ok(())
            }
            Err(err) => {
                warn!(service_id = self.id, "{}", err);
                Err(err)
            }
        }
    }

    pub fn update_status(&mut self, status: ServiceStatus) {
        debug!(
            service_id = self.id,
            from = %self.status,
            to = %status,
            "Service status updated"
        );
        self.status = status;
    }
}

impl fmt::Display for GuestService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service ID: {}, Type: {}, Request Time: {}, Status: {}",
            self.id,
            self.service_type,
            self.request_time.format(REQUEST_TIME_FORMAT),
            self.status
        )
    }
}
