//! Synthesis of simulated external arrivals.
//!
//! The arrival generator in `frontdesk-runtime` ticks on a timer; each tick
//! that passes the probability check calls [`synthesize_arrival`] to build a
//! plausible reservation from small fixed pools. Every random decision goes
//! through the injected [`Entropy`], so tests can script exact arrivals.

use crate::environment::{Clock, Entropy};
use crate::reservation::{ReservationDraft, ReservationSource, ReservationStatus};
use chrono::Days;
use std::time::Duration;

/// How often the generator ticks
pub const ARRIVAL_INTERVAL: Duration = Duration::from_secs(30);

/// Chance that a tick produces an arrival
pub const ARRIVAL_PROBABILITY: f64 = 0.3;

const GUEST_POOL: [&str; 5] = [
    "Ana López",
    "Diego Martín",
    "Sofia Herrera",
    "Miguel Torres",
    "Laura Jiménez",
];

const ROOM_POOL: [&str; 5] = ["103", "201", "304", "105", "208"];

const ROOM_TYPE_POOL: [&str; 3] = ["Habitación Estándar", "Suite Deluxe", "Suite Junior"];

/// Builds one plausible external reservation.
///
/// Check-in falls uniformly within the next seven days, the stay lasts one
/// to five nights, the party is one to four guests, and the amount lands in
/// 150 000 – 450 000. Status is always `confirmed` and source `external`.
#[must_use]
pub fn synthesize_arrival(clock: &dyn Clock, entropy: &dyn Entropy) -> ReservationDraft {
    let guest_name = GUEST_POOL[entropy.index(GUEST_POOL.len())];
    let email = format!("{}@email.com", guest_name.to_lowercase().replace(' ', "."));
    let phone = format!(
        "+57 30{} {} {}",
        entropy.index(10),
        100 + entropy.index(900),
        1000 + entropy.index(9000),
    );

    let check_in = clock.today() + Days::new(entropy.index(7) as u64);
    let nights = 1 + entropy.index(5);
    let check_out = check_in + Days::new(nights as u64);

    // Note: pool indices are tiny; the casts cannot truncate
    #[allow(clippy::cast_possible_truncation)]
    let guests = (1 + entropy.index(4)) as u32;

    ReservationDraft {
        guest_name: guest_name.to_string(),
        email,
        phone,
        room_number: ROOM_POOL[entropy.index(ROOM_POOL.len())].to_string(),
        room_type: ROOM_TYPE_POOL[entropy.index(ROOM_TYPE_POOL.len())].to_string(),
        check_in,
        check_out,
        status: ReservationStatus::Confirmed,
        source: ReservationSource::External,
        total_amount: entropy.between(150_000, 450_000),
        guests,
        special_requests: None,
    }
}
