//! The reservation store: single source of truth for the reservation book.
//!
//! The store owns the state behind a `RwLock`, runs every action through the
//! desk reducer, and broadcasts the change events the reducer publishes.
//! Consumers (views, the demo, tests) subscribe and pull a fresh snapshot
//! per event instead of relying on implicit reactivity.

use crate::error::StoreError;
use frontdesk_core::SmallVec;
use frontdesk_core::availability;
use frontdesk_core::desk::{DeskAction, DeskEnvironment, DeskReducer};
use frontdesk_core::effect::Effect;
use frontdesk_core::reducer::Reducer;
use frontdesk_core::reservation::{Reservation, ReservationDraft, ReservationId, ReservationPatch};
use frontdesk_core::state::DeskState;
use frontdesk_core::stats::DashboardStats;
use chrono::NaiveDate;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, broadcast};

/// The store - runtime coordinator for the reservation desk
///
/// Cloning is cheap and every clone shares the same state, event channel,
/// and shutdown flag, so views and the arrival generator can each hold one.
///
/// # Example
///
/// ```no_run
/// use frontdesk_core::desk::DeskEnvironment;
/// use frontdesk_core::state::DeskState;
/// use frontdesk_runtime::store::ReservationStore;
///
/// # async fn example() -> Result<(), frontdesk_runtime::StoreError> {
/// let store = ReservationStore::new(DeskState::new(), DeskEnvironment::system());
/// let _events = store.subscribe();
/// # Ok(())
/// # }
/// ```
pub struct ReservationStore {
    state: Arc<RwLock<DeskState>>,
    reducer: DeskReducer,
    environment: DeskEnvironment,
    events: broadcast::Sender<DeskAction>,
    shutdown: Arc<AtomicBool>,
}

impl ReservationStore {
    /// Default capacity of the change event channel
    const EVENT_CAPACITY: usize = 16;

    /// Creates a store owning `initial_state`
    #[must_use]
    pub fn new(initial_state: DeskState, environment: DeskEnvironment) -> Self {
        Self::with_event_capacity(initial_state, environment, Self::EVENT_CAPACITY)
    }

    /// Creates a store with a custom event channel capacity.
    ///
    /// Increase the capacity when many slow subscribers would otherwise lag
    /// behind the broadcast.
    #[must_use]
    pub fn with_event_capacity(
        initial_state: DeskState,
        environment: DeskEnvironment,
        capacity: usize,
    ) -> Self {
        let (events, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: DeskReducer::new(),
            environment,
            events,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Admits a new reservation and returns the fully populated record.
    ///
    /// The store assigns the id and the creation timestamp; everything else
    /// comes from the draft unchanged. Subscribers receive a
    /// [`DeskAction::ReservationCreated`] event.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ShutdownInProgress`] if the store is shutting down
    /// - [`StoreError::CommandRejected`] if the reducer produced no created
    ///   event (an internal invariant violation, never expected)
    pub async fn create(&self, draft: ReservationDraft) -> Result<Reservation, StoreError> {
        let effects = self.dispatch(DeskAction::Create { draft }).await?;

        for effect in effects {
            if let Effect::Publish(DeskAction::ReservationCreated { reservation }) = effect {
                return Ok(reservation);
            }
        }
        Err(StoreError::CommandRejected)
    }

    /// Merges a partial update into the reservation with `id`.
    ///
    /// An unknown id is a silent no-op by contract; no event is published
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn update(&self, id: ReservationId, patch: ReservationPatch) -> Result<(), StoreError> {
        self.dispatch(DeskAction::Update { id, patch }).await?;
        Ok(())
    }

    /// Removes the reservation with `id`; absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn delete(&self, id: ReservationId) -> Result<(), StoreError> {
        self.dispatch(DeskAction::Delete { id }).await?;
        Ok(())
    }

    /// Sends a raw action through the reducer.
    ///
    /// The typed operations ([`create`](Self::create) and friends) cover
    /// normal use; this is the path the arrival generator drives.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn send(&self, action: DeskAction) -> Result<(), StoreError> {
        self.dispatch(action).await?;
        Ok(())
    }

    /// Subscribes to the change event stream.
    ///
    /// Events are published synchronously after the mutation that caused
    /// them, in mutation order. Subscribers should pull a fresh snapshot
    /// ([`list`](Self::list)) per event rather than mirror state themselves.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeskAction> {
        self.events.subscribe()
    }

    /// Returns an owned snapshot of the whole book, in insertion order.
    ///
    /// Mutating the snapshot does not affect the store.
    pub async fn list(&self) -> Vec<Reservation> {
        self.state.read().await.reservations().to_vec()
    }

    /// Read-only access to the current state through a projection function
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&DeskState) -> T,
    {
        f(&*self.state.read().await)
    }

    /// Every reservation whose stay contains `date` (half-open rule)
    pub async fn reservations_on(&self, date: NaiveDate) -> Vec<Reservation> {
        self.state(|s| {
            availability::reservations_on(s.reservations(), date)
                .into_iter()
                .cloned()
                .collect()
        })
        .await
    }

    /// The reservation occupying `room_number` on `date`, if any
    pub async fn occupant_of(&self, room_number: &str, date: NaiveDate) -> Option<Reservation> {
        self.state(|s| availability::occupant_of(s.reservations(), room_number, date).cloned())
            .await
    }

    /// Computes the dashboard statistics from the current book, using the
    /// environment clock for "today"
    pub async fn dashboard(&self) -> DashboardStats {
        let today = self.environment.clock.today();
        self.state(|s| DashboardStats::compute(s.reservations(), today))
            .await
    }

    /// Flips the shutdown flag; subsequent sends fail with
    /// [`StoreError::ShutdownInProgress`].
    ///
    /// This is also how the arrival generator loop learns to stop.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
        tracing::info!("reservation store shutting down");
    }

    /// Whether the store has been shut down
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Runs one action through the reducer and publishes its events.
    ///
    /// Events are broadcast while the write lock is still held: `send` is
    /// non-blocking, and publishing under the lock is what keeps event
    /// order equal to mutation order when several tasks (views, the
    /// arrival generator) dispatch concurrently.
    async fn dispatch(
        &self,
        action: DeskAction,
    ) -> Result<SmallVec<[Effect<DeskAction>; 4]>, StoreError> {
        if self.is_shutdown() {
            return Err(StoreError::ShutdownInProgress);
        }

        metrics::counter!("frontdesk.store.actions").increment(1);

        let mut state = self.state.write().await;
        let effects = self.reducer.reduce(&mut state, action, &self.environment);

        for effect in &effects {
            if let Some(event) = effect.published() {
                metrics::counter!("frontdesk.store.events").increment(1);
                // A send error only means there are currently no
                // subscribers, which is fine.
                let _ = self.events.send(event.clone());
            }
        }
        drop(state);

        Ok(effects)
    }
}

impl Clone for ReservationStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer,
            environment: self.environment.clone(),
            events: self.events.clone(),
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}

impl std::fmt::Debug for ReservationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationStore")
            .field("shutdown", &self.is_shutdown())
            .finish_non_exhaustive()
    }
}
