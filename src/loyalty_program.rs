// Loyalty rewards program linked to a single guest
use std::fmt;

use tracing::info;

use crate::error::ValidationError;
use crate::guest::{checked_points, non_negative_points, Guest};
use crate::Shared;

// Emitted for every successful award. Both the program ledger and the guest
// balance are updated from this one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsEarned {
    pub program_id: u32,
    pub guest_id: u32,
    pub points: u64,
}

#[derive(Debug)]
pub struct LoyaltyProgram {
    id: u32,
    guest: Shared<Guest>,
    points: u64,
}

impl LoyaltyProgram {
    pub fn new(id: u32, guest: Shared<Guest>) -> Self {
        Self {
            id,
            guest,
            points: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn guest(&self) -> &Shared<Guest> {
        &self.guest
    }

    // Points awarded through this program only. The guest total may be larger.
    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn earn_points(&mut self, points: i64) -> Result<PointsEarned, ValidationError> {
        let points = non_negative_points(points)?;

        let mut guest = self.guest.write();

        // Both counters are checked before either one moves
        let program_balance = checked_points(self.points, points)?;
        guest.balance_after(points)?;

        let event = PointsEarned {
            program_id: self.id,
            guest_id: guest.id(),
            points,
        };
        guest.apply_points_earned(&event)?;
        self.points = program_balance;

        info!(
            program_id = event.program_id,
            guest_id = event.guest_id,
            points = event.points,
            "Loyalty points earned"
        );
        Ok(event)
    }
}

impl fmt::Display for LoyaltyProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loyalty Program ID: {}, Guest: {}, Points: {}",
            self.id,
            self.guest.read().name(),
            self.points
        )
    }
}
