//! Demo seed data: the three reservations the desk starts with.
//!
//! Dates are relative to the injected clock so the seeded calendar always
//! shows a current week: one guest in-house today, one arriving tomorrow,
//! one pending arrival next week.

use crate::environment::Clock;
use crate::reservation::{Reservation, ReservationSource, ReservationStatus};
use chrono::Days;

/// Builds the three seed reservations (ids "1", "2", "3")
#[must_use]
pub fn initial_reservations(clock: &dyn Clock) -> Vec<Reservation> {
    let created_at = clock.now();
    let today = clock.today();
    let tomorrow = today + Days::new(1);
    let next_week = today + Days::new(7);

    vec![
        Reservation {
            id: "1".into(),
            guest_name: "Juan Pérez".to_string(),
            email: "juan.perez@email.com".to_string(),
            phone: "+57 300 123 4567".to_string(),
            room_number: "101".to_string(),
            room_type: "Suite Deluxe".to_string(),
            check_in: today,
            check_out: tomorrow,
            status: ReservationStatus::Confirmed,
            source: ReservationSource::Direct,
            total_amount: 250_000,
            guests: 2,
            special_requests: Some("Cama extra".to_string()),
            created_at,
        },
        Reservation {
            id: "2".into(),
            guest_name: "María García".to_string(),
            email: "maria.garcia@email.com".to_string(),
            phone: "+57 301 987 6543".to_string(),
            room_number: "205".to_string(),
            room_type: "Habitación Estándar".to_string(),
            check_in: tomorrow,
            check_out: next_week,
            status: ReservationStatus::Confirmed,
            source: ReservationSource::Booking,
            total_amount: 180_000,
            guests: 1,
            special_requests: None,
            created_at,
        },
        Reservation {
            id: "3".into(),
            guest_name: "Carlos Rodríguez".to_string(),
            email: "carlos.rodriguez@email.com".to_string(),
            phone: "+57 302 456 7890".to_string(),
            room_number: "302".to_string(),
            room_type: "Suite Presidencial".to_string(),
            check_in: next_week,
            check_out: next_week + Days::new(2),
            status: ReservationStatus::Pending,
            source: ReservationSource::External,
            total_amount: 450_000,
            guests: 3,
            special_requests: Some("Vista al mar, late check-out".to_string()),
            created_at,
        },
    ]
}
