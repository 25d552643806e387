// Invoices issued against a booking
use std::fmt;
use std::sync::Arc;

use crate::booking::Booking;

#[derive(Debug, Clone)]
pub struct Invoice {
    id: u32,
    booking: Arc<Booking>,
    payment_method: String,
}

impl Invoice {
    // The payment method is a free-form label
    pub fn new(
        id: u32,
        booking: Arc<Booking>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            id,
            booking,
            payment_method: payment_method.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn booking(&self) -> &Arc<Booking> {
        &self.booking
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn total_cost(&self) -> f64 {
        self.booking.total_cost()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invoice ID: {}, Booking ID: {}, Total Cost: ${:.2}, Payment Method: {}",
            self.id,
            self.booking.id(),
            self.total_cost(),
            self.payment_method
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::Guest;
    use crate::room::Room;
    use crate::{shared, Shared};
    use chrono::NaiveDate;

    fn booked_room() -> (Shared<Room>, Arc<Booking>) {
        let guest = shared(Guest::new(1, "Shaikha Alkaabi", "Shaikha.j2005@gmail.com"));
        let room = shared(Room::new(101, "Double", vec!["Free Breakfast".to_string()], 120.0));
        let booking = Booking::new(
            1,
            guest,
            room.clone(),
            NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
            NaiveDate::from_ymd_opt(2023, 5, 20).unwrap(),
        );
        (room, Arc::new(booking))
    }

    #[test]
    fn test_invoice_reads_booking_cost() {
        let (_, booking) = booked_room();
        let invoice = Invoice::new(1, booking.clone(), "Credit Card");
        assert_eq!(invoice.id(), 1);
        assert_eq!(invoice.payment_method(), "Credit Card");
        assert_eq!(invoice.booking().id(), booking.id());
        assert_eq!(invoice.total_cost(), 600.0);
    }

    #[test]
    fn test_invoice_cost_ignores_later_room_changes() {
        let (room, booking) = booked_room();
        let invoice = Invoice::new(1, booking, "Cash");

        room.write().set_availability(false);
        *room.write() = Room::new(101, "Suite", Vec::new(), 500.0);

        assert_eq!(invoice.total_cost(), 600.0);
    }

    #[test]
    fn test_display_lists_every_field() {
        let (_, booking) = booked_room();
        let invoice = Invoice::new(3, booking, "Credit Card");
        assert_eq!(
            invoice.to_string(),
            "Invoice ID: 3, Booking ID: 1, Total Cost: $600.00, Payment Method: Credit Card"
        );
    }
}
