use crate::domain::prelude::*;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use std::ops::RangeInclusive;

/// Per-passenger fare in rupees.
pub const FARE_PER_PASSENGER: RangeInclusive<u32> = 15..=30;

/// Numeric part of the bus number, always three digits.
pub const BUS_NUMBERS: RangeInclusive<u32> = 100..=999;

/// Seats on a bus.
pub const SEATS: RangeInclusive<u32> = 1..=50;

/// How long a ticket is shown as valid after it is generated. Informational
/// only, nothing enforces it.
pub const VALIDITY_MINUTES: i64 = 15;

/// Generates a ticket for a trip.
///
/// The trip is validated first; on success fare, bus and seat are drawn from
/// `rng` and the ticket expires [`VALIDITY_MINUTES`] after `now`. Passing a
/// seeded rng and a fixed clock makes the result fully reproducible.
///
/// # Arguments
///
/// * `trip` - The submitted trip details.
/// * `rng` - Source of the random fare, bus and seat draws.
/// * `now` - Generation time, the base of the expiration timestamp.
///
pub fn generate<R>(
    trip: TripRequest,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<TicketRecord, ValidationError>
where
    R: Rng,
{
    trip.validate()?;

    let fare = rng.random_range(FARE_PER_PASSENGER) * u32::from(trip.num_passengers);
    let bus_number = format!("BUS-{}", rng.random_range(BUS_NUMBERS));
    let seat_number = format!("S{}", rng.random_range(SEATS));
    let expires_at = now + Duration::minutes(VALIDITY_MINUTES);

    let payment_qr_payload = format!("Payment for Rs.{fare} - {}", trip.passenger_name);
    let ticket_qr_payload = format!("Download Ticket for {}", trip.passenger_name);

    tracing::debug!(
        passenger = %trip.passenger_name,
        fare,
        bus = %bus_number,
        seat = %seat_number,
        "ticket generated"
    );

    Ok(TicketRecord {
        trip,
        fare,
        bus_number,
        seat_number,
        expires_at,
        payment_qr_payload,
        ticket_qr_payload,
    })
}
