// Guest records: identity, contact details and the loyalty point balance
use std::fmt;

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::loyalty_program::PointsEarned;

#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    id: u32,
    name: String,
    contact: String,
    loyalty_points: u64,
}

impl Guest {
    pub fn new(id: u32, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
            loyalty_points: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn loyalty_points(&self) -> u64 {
        self.loyalty_points
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.contact = contact.into();
    }

    // Adds points and returns the new balance. Negative amounts and awards that
    // would overflow the balance leave it untouched.
    pub fn add_loyalty_points(&mut self, points: i64) -> Result<u64, ValidationError> {
        let points = non_negative_points(points)?;
        self.credit(points)
    }

    pub fn apply_points_earned(&mut self, event: &PointsEarned) -> Result<u64, ValidationError> {
        self.credit(event.points)
    }

    // Balance after crediting `points`, without changing it
    pub fn balance_after(&self, points: u64) -> Result<u64, ValidationError> {
        checked_points(self.loyalty_points, points)
    }

    fn credit(&mut self, points: u64) -> Result<u64, ValidationError> {
        self.loyalty_points = self.balance_after(points)?;
        debug!(
            guest_id = self.id,
            points,
            balance = self.loyalty_points,
            "Loyalty points added"
        );
        Ok(self.loyalty_points)
    }
}

// Shared by every code path that accepts a point amount
pub(crate) fn non_negative_points(points: i64) -> Result<u64, ValidationError> {
    u64::try_from(points).map_err(|_| {
        let err = ValidationError::NegativePoints(points);
        warn!("{}", err);
        err
    })
}

pub(crate) fn checked_points(balance: u64, points: u64) -> Result<u64, ValidationError> {
    balance.checked_add(points).ok_or_else(|| {
        let err = ValidationError::PointsOverflow { balance, points };
        warn!("{}", err);
        err
    })
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest ID: {}, Name: {}, Contact: {}, Loyalty Points: {}",
            self.id, self.name, self.contact, self.loyalty_points
        )
    }
}
