//! Derived statistics for the dashboard.
//!
//! Pure, side-effect-free functions over a reservation snapshot. Collections
//! are small, so nothing is cached; every dashboard render recomputes from
//! the current book.

use crate::reservation::{Reservation, ReservationStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Assumed total room capacity for the occupancy rate
pub const FIXED_ROOM_CAPACITY: usize = 50;

/// Number of reservations checking in on `today`
#[must_use]
pub fn todays_arrivals(reservations: &[Reservation], today: NaiveDate) -> usize {
    reservations.iter().filter(|r| r.check_in == today).count()
}

/// Number of reservations with `confirmed` status
#[must_use]
pub fn active_guests(reservations: &[Reservation]) -> usize {
    reservations
        .iter()
        .filter(|r| r.status == ReservationStatus::Confirmed)
        .count()
}

/// Sum of `total_amount` over the whole book.
///
/// No status filter: cancelled reservations still count toward the sum.
/// This matches the dashboard's historical behavior and is guarded by a
/// regression test; do not filter here without a product decision.
#[must_use]
pub fn total_revenue(reservations: &[Reservation]) -> u64 {
    reservations.iter().map(|r| r.total_amount).sum()
}

/// Occupancy percentage: `min(100, count / capacity * 100)` against the
/// fixed [`FIXED_ROOM_CAPACITY`]
#[must_use]
pub fn occupancy_rate(reservation_count: usize) -> f64 {
    // Note: counts are far below 2^52, the division is exact enough
    #[allow(clippy::cast_precision_loss)]
    let pct = reservation_count as f64 / FIXED_ROOM_CAPACITY as f64 * 100.0;
    pct.min(100.0)
}

/// One dashboard snapshot, computed from the current book
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Reservations checking in today
    pub todays_arrivals: usize,
    /// Reservations currently confirmed
    pub active_guests: usize,
    /// Revenue over the whole book, cancelled included
    pub total_revenue: u64,
    /// Occupancy percentage, capped at 100
    pub occupancy_rate: f64,
}

impl DashboardStats {
    /// Computes all four statistics in one pass over the snapshot
    #[must_use]
    pub fn compute(reservations: &[Reservation], today: NaiveDate) -> Self {
        Self {
            todays_arrivals: todays_arrivals(reservations, today),
            active_guests: active_guests(reservations),
            total_revenue: total_revenue(reservations),
            occupancy_rate: occupancy_rate(reservations.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::{ReservationId, ReservationSource};
    use chrono::Utc;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn booking(id: &str, check_in: &str, status: ReservationStatus, amount: u64) -> Reservation {
        Reservation {
            id: ReservationId::from(id),
            guest_name: format!("Guest {id}"),
            email: format!("g{id}@e.com"),
            phone: "1".to_string(),
            room_number: "101".to_string(),
            room_type: "Standard".to_string(),
            check_in: date(check_in),
            check_out: date(check_in) + chrono::Days::new(2),
            status,
            source: ReservationSource::Direct,
            total_amount: amount,
            guests: 1,
            special_requests: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn occupancy_rate_is_zero_when_empty() {
        assert!((occupancy_rate(0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn occupancy_rate_caps_at_one_hundred() {
        assert!((occupancy_rate(50) - 100.0).abs() < f64::EPSILON);
        assert!((occupancy_rate(80) - 100.0).abs() < f64::EPSILON);
        assert!((occupancy_rate(25) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn revenue_includes_cancelled_reservations() {
        let book = vec![
            booking("1", "2024-01-10", ReservationStatus::Confirmed, 100_000),
            booking("2", "2024-01-11", ReservationStatus::Cancelled, 50_000),
        ];
        assert_eq!(total_revenue(&book), 150_000);
    }

    #[test]
    fn arrivals_count_exact_check_in_matches() {
        let today = date("2024-01-10");
        let book = vec![
            booking("1", "2024-01-10", ReservationStatus::Confirmed, 1),
            booking("2", "2024-01-10", ReservationStatus::Pending, 1),
            booking("3", "2024-01-11", ReservationStatus::Confirmed, 1),
        ];
        assert_eq!(todays_arrivals(&book, today), 2);
    }

    #[test]
    fn active_guests_count_confirmed_only() {
        let book = vec![
            booking("1", "2024-01-10", ReservationStatus::Confirmed, 1),
            booking("2", "2024-01-10", ReservationStatus::Pending, 1),
            booking("3", "2024-01-10", ReservationStatus::Cancelled, 1),
        ];
        assert_eq!(active_guests(&book), 1);
    }

    #[test]
    fn compute_aggregates_all_statistics() {
        let today = date("2024-01-10");
        let book = vec![
            booking("1", "2024-01-10", ReservationStatus::Confirmed, 100_000),
            booking("2", "2024-01-12", ReservationStatus::Cancelled, 50_000),
        ];

        let stats = DashboardStats::compute(&book, today);
        assert_eq!(stats.todays_arrivals, 1);
        assert_eq!(stats.active_guests, 1);
        assert_eq!(stats.total_revenue, 150_000);
        assert!((stats.occupancy_rate - 4.0).abs() < f64::EPSILON);
    }
}
