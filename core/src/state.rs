//! The reservation book: the one collection of reservations.
//!
//! [`DeskState`] preserves insertion order and exposes read-only access;
//! mutation happens exclusively through the desk reducer in this crate.
//! Views that need a different order sort their own snapshots.

use crate::environment::Clock;
use crate::reservation::{Reservation, ReservationId};
use crate::seed;

/// Current state of the reservation desk
#[derive(Clone, Debug, Default)]
pub struct DeskState {
    reservations: Vec<Reservation>,
}

impl DeskState {
    /// Creates an empty reservation book
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reservations: Vec::new(),
        }
    }

    /// Creates a book pre-loaded with the demo seed data (ids "1", "2",
    /// "3"), dated relative to the given clock
    #[must_use]
    pub fn seeded(clock: &dyn Clock) -> Self {
        Self {
            reservations: seed::initial_reservations(clock),
        }
    }

    /// All reservations in insertion order
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Number of reservations in the book
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Whether the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Looks up a reservation by id
    #[must_use]
    pub fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| &r.id == id)
    }

    /// Whether a reservation with this id exists
    #[must_use]
    pub fn contains(&self, id: &ReservationId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a reservation at the end of the book
    pub(crate) fn insert(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Mutable lookup for the reducer's merge path
    pub(crate) fn get_mut(&mut self, id: &ReservationId) -> Option<&mut Reservation> {
        self.reservations.iter_mut().find(|r| &r.id == id)
    }

    /// Removes and returns the reservation with this id, keeping the order
    /// of the remaining records
    pub(crate) fn remove(&mut self, id: &ReservationId) -> Option<Reservation> {
        let position = self.reservations.iter().position(|r| &r.id == id)?;
        Some(self.reservations.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::{ReservationSource, ReservationStatus};
    use crate::seed;
    use chrono::Utc;

    struct FrozenClock(chrono::DateTime<Utc>);

    impl Clock for FrozenClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn seeded_book_matches_demo_data() {
        let clock = FrozenClock(Utc::now());
        let state = DeskState::seeded(&clock);

        assert_eq!(state.len(), 3);
        let ids: Vec<_> = state
            .reservations()
            .iter()
            .map(|r| r.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);

        let first = state.get(&"1".into()).unwrap();
        assert_eq!(first.status, ReservationStatus::Confirmed);
        assert_eq!(first.source, ReservationSource::Direct);
        assert_eq!(first.check_in, clock.today());
    }

    #[test]
    fn seed_data_spans_at_least_one_night() {
        let clock = FrozenClock(Utc::now());
        for r in seed::initial_reservations(&clock) {
            assert!(r.check_in < r.check_out, "seed {} has an empty stay", r.id);
        }
    }

    #[test]
    fn remove_preserves_order_of_remaining() {
        let clock = FrozenClock(Utc::now());
        let mut state = DeskState::seeded(&clock);

        let removed = state.remove(&"2".into()).unwrap();
        assert_eq!(removed.id.as_str(), "2");
        assert!(state.remove(&"2".into()).is_none());

        let ids: Vec<_> = state
            .reservations()
            .iter()
            .map(|r| r.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
