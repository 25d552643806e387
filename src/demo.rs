// Demo scenario: one instance of every entity, printed in a fixed order
use std::io::Write;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::booking::Booking;
use crate::config::DemoConfig;
use crate::error::{DemoError, ValidationError};
use crate::feedback::Feedback;
use crate::guest::Guest;
use crate::guest_service::GuestService;
use crate::invoice::Invoice;
use crate::loyalty_program::LoyaltyProgram;
use crate::room::Room;
use crate::{shared, Shared};

#[derive(Debug)]
pub struct Scenario {
    pub guest: Shared<Guest>,
    pub room: Shared<Room>,
    pub booking: Arc<Booking>,
    pub invoice: Invoice,
    pub loyalty_program: LoyaltyProgram,
    // None when the configured rating was rejected
    pub feedback: Option<Feedback>,
    pub service: GuestService,
    // Every validation failure hit while running, in order
    pub rejections: Vec<ValidationError>,
}

impl Scenario {
    // Builds each entity and writes its block right away, so every block shows
    // the state at the moment it was created (the guest block has no points yet).
    // `now` is used as the service request time unless the config pins one.
    // Rejected values are logged and collected in `rejections`; the run carries
    // on with the entity in its prior state. Only output errors abort.
    pub fn run<W: Write>(
        config: &DemoConfig,
        now: DateTime<Utc>,
        out: &mut W,
    ) -> Result<Self, DemoError> {
        info!("Running hotel demo scenario");
        let mut rejections = Vec::new();

        let guest = shared(Guest::new(
            config.guest.id,
            config.guest.name.clone(),
            config.guest.contact.clone(),
        ));
        write_block(out, "Guest", &*guest.read(), true)?;

        let room = shared(Room::new(
            config.room.id,
            config.room.room_type.clone(),
            config.room.amenities.clone(),
            config.room.price_per_night,
        ));
        if !config.room.available {
            room.write().set_availability(false);
        }
        write_block(out, "Room", &*room.read(), true)?;

        let booking = Arc::new(Booking::new(
            config.booking.id,
            guest.clone(),
            room.clone(),
            config.booking.check_in,
            config.booking.check_out,
        ));
        rejections.extend(booking.rejection().cloned());
        write_block(out, "Booking", &*booking, true)?;

        let invoice = Invoice::new(
            config.invoice.id,
            booking.clone(),
            config.invoice.payment_method.clone(),
        );
        write_block(out, "Invoice", &invoice, true)?;

        let mut loyalty_program = LoyaltyProgram::new(config.loyalty.program_id, guest.clone());
        if let Err(err) = loyalty_program.earn_points(config.loyalty.points) {
            rejections.push(err);
        }
        write_block(out, "Loyalty Program", &loyalty_program, true)?;

        let feedback = match Feedback::new(
            config.feedback.id,
            guest.clone(),
            config.feedback.rating,
            config.feedback.comments.clone(),
        ) {
            Ok(feedback) => {
                write_block(out, "Feedback", &feedback, true)?;
                Some(feedback)
            }
            Err(err) => {
                write_block(out, "Feedback", &format_args!("Error: {}", err), true)?;
                rejections.push(err);
                None
            }
        };

        let mut service = GuestService::new(
            config.service.id,
            config.service.service_type.clone(),
            config.service.request_time.unwrap_or(now),
        );
        if let Err(err) = service.set_status(&config.service.status) {
            rejections.push(err);
        }
        write_block(out, "Guest Service", &service, false)?;

        Ok(Self {
            guest,
            room,
            booking,
            invoice,
            loyalty_program,
            feedback,
            service,
            rejections,
        })
    }
}

fn write_block<W: Write>(
    out: &mut W,
    title: &str,
    entity: &dyn std::fmt::Display,
    trailing_blank: bool,
) -> std::io::Result<()> {
    writeln!(out, "{} Details:", title)?;
    writeln!(out, "{}", entity)?;
    if trailing_blank {
        writeln!(out)?;
    }
    Ok(())
}
