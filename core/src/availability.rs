//! Occupancy queries for the calendar grid.
//!
//! Pure functions over a reservation snapshot. All date logic uses the
//! half-open rule: a stay occupies `[check_in, check_out)`.

use crate::reservation::Reservation;
use chrono::NaiveDate;

/// The reservation occupying `room_number` on `date`, if any.
///
/// By convention at most one reservation matches; the source data does not
/// enforce non-overlap, and when records do overlap the first in collection
/// order wins. Overlap is a data-quality issue outside this query's remit.
#[must_use]
pub fn occupant_of<'a>(
    reservations: &'a [Reservation],
    room_number: &str,
    date: NaiveDate,
) -> Option<&'a Reservation> {
    reservations
        .iter()
        .find(|r| r.room_number == room_number && r.occupies(date))
}

/// Every reservation whose stay contains `date`, in collection order
#[must_use]
pub fn reservations_on(reservations: &[Reservation], date: NaiveDate) -> Vec<&Reservation> {
    reservations.iter().filter(|r| r.occupies(date)).collect()
}
