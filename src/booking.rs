// Bookings: a guest staying in a room over a date range
use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::guest::Guest;
use crate::room::Room;
use crate::Shared;

// The total cost is priced once at construction and never recomputed, so later
// changes to the room's rate or availability do not affect it.
#[derive(Debug)]
pub struct Booking {
    id: u32,
    guest: Shared<Guest>,
    room: Shared<Room>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_cost: f64,
    rejection: Option<ValidationError>,
}

impl Booking {
    // Always produces a booking. An unavailable room yields a zero cost and the
    // rejection is kept for callers to inspect via `rejection()`.
    pub fn new(
        id: u32,
        guest: Shared<Guest>,
        room: Shared<Room>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        let (total_cost, rejection) =
            match calculate_total_cost(&room.read(), check_in, check_out) {
                Ok(cost) => (cost, None),
                Err(err) => {
                    warn!(booking_id = id, "{}", err);
                    (0.0, Some(err))
                }
            };

        Self {
            id,
            guest,
            room,
            check_in,
            check_out,
            total_cost,
            rejection,
        }
    }

    // Strict variant: refuses to build a booking for an unavailable room.
    pub fn try_new(
        id: u32,
        guest: Shared<Guest>,
        room: Shared<Room>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let mut booking = Self::new(id, guest, room, check_in, check_out);
        if let Some(err) = booking.rejection.take() {
            return Err(err);
        }
        Ok(booking)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn guest(&self) -> &Shared<Guest> {
        &self.guest
    }

    pub fn room(&self) -> &Shared<Room> {
        &self.room
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    // Negative when check-out precedes check-in
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn rejection(&self) -> Option<&ValidationError> {
        self.rejection.as_ref()
    }
}

fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

// nights x nightly rate. Reversed date ranges are priced as-is (negative cost).
pub fn calculate_total_cost(
    room: &Room,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<f64, ValidationError> {
    if !room.is_available() {
        return Err(ValidationError::RoomUnavailable { room_id: room.id() });
    }

    let nights = nights_between(check_in, check_out);
    if nights < 0 {
        warn!(
            room_id = room.id(),
            %check_in,
            %check_out,
            "Check-out precedes check-in, booking cost will be negative"
        );
    }

    let cost = nights as f64 * room.price_per_night();
    debug!(room_id = room.id(), nights, cost, "Booking priced");
    Ok(cost)
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking ID: {}, Guest: {}, Room: {}, Check-In: {}, Check-Out: {}, Total Cost: ${:.2}",
            self.id,
            self.guest.read().name(),
            self.room.read().room_type(),
            self.check_in,
            self.check_out,
            self.total_cost
        )
    }
}
