//! The desk reducer: commands, change events, and the logic between them.
//!
//! [`DeskAction`] unifies the commands a view (or the arrival generator) can
//! issue with the change events the desk publishes back to subscribers.
//! [`DeskReducer`] is the only code that mutates [`DeskState`].

use crate::arrivals::{self, ARRIVAL_PROBABILITY};
use crate::effect::Effect;
use crate::environment::{Clock, Entropy, IdSource, SystemClock, SystemEntropy, TimeBasedIdSource};
use crate::reducer::Reducer;
use crate::reservation::{Reservation, ReservationDraft, ReservationId, ReservationPatch};
use crate::state::DeskState;
use smallvec::{SmallVec, smallvec};
use std::sync::Arc;

/// Commands accepted by the desk and the change events it publishes
#[derive(Clone, Debug)]
pub enum DeskAction {
    // ========== Commands ==========
    /// Command: admit a new reservation
    Create {
        /// The reservation input; id and creation time are assigned here
        draft: ReservationDraft,
    },

    /// Command: merge a partial update into an existing reservation.
    ///
    /// An unknown id is a silent no-op. That is the documented contract,
    /// not an omission: the desk has no recoverable error conditions.
    Update {
        /// Reservation to update
        id: ReservationId,
        /// Fields to merge
        patch: ReservationPatch,
    },

    /// Command: remove a reservation. Absent ids are a silent no-op.
    Delete {
        /// Reservation to remove
        id: ReservationId,
    },

    /// Command: one tick of the external arrival simulator.
    ///
    /// With probability [`ARRIVAL_PROBABILITY`] the tick synthesizes an
    /// arrival and admits it exactly like [`DeskAction::Create`].
    ArrivalTick,

    // ========== Events ==========
    /// Event: a reservation was admitted
    ReservationCreated {
        /// The fully populated record
        reservation: Reservation,
    },

    /// Event: a reservation was updated
    ReservationUpdated {
        /// The record after the merge
        reservation: Reservation,
    },

    /// Event: a reservation was removed
    ReservationDeleted {
        /// Id of the removed record
        id: ReservationId,
    },
}

impl DeskAction {
    /// Whether this action is a command (an input to the desk)
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(
            self,
            Self::Create { .. } | Self::Update { .. } | Self::Delete { .. } | Self::ArrivalTick
        )
    }

    /// Whether this action is a change event (an output of the desk)
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }
}

/// Environment dependencies for the desk reducer
#[derive(Clone)]
pub struct DeskEnvironment {
    /// Clock for creation timestamps and "today"
    pub clock: Arc<dyn Clock>,
    /// Source of fresh reservation ids
    pub ids: Arc<dyn IdSource>,
    /// Randomness for the arrival simulator
    pub entropy: Arc<dyn Entropy>,
}

impl DeskEnvironment {
    /// Creates an environment from explicit dependencies
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>, entropy: Arc<dyn Entropy>) -> Self {
        Self { clock, ids, entropy }
    }

    /// The production wiring: system clock, time-based ids, thread rng
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(TimeBasedIdSource::new()),
            Arc::new(SystemEntropy),
        )
    }
}

impl std::fmt::Debug for DeskEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeskEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the reservation desk
#[derive(Clone, Copy, Debug, Default)]
pub struct DeskReducer;

impl DeskReducer {
    /// Creates a new desk reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Admits a draft: assigns id and creation time, appends, and publishes
    /// the created event
    fn admit(
        state: &mut DeskState,
        environment: &DeskEnvironment,
        draft: ReservationDraft,
    ) -> SmallVec<[Effect<DeskAction>; 4]> {
        let id = environment.ids.next_id();
        debug_assert!(!state.contains(&id), "id source produced a collision");

        let reservation = draft.into_reservation(id, environment.clock.now());
        state.insert(reservation.clone());

        tracing::debug!(
            id = %reservation.id,
            guest = %reservation.guest_name,
            source = %reservation.source,
            "reservation admitted"
        );

        smallvec![Effect::Publish(DeskAction::ReservationCreated {
            reservation
        })]
    }
}

impl Reducer for DeskReducer {
    type State = DeskState;
    type Action = DeskAction;
    type Environment = DeskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            DeskAction::Create { draft } => Self::admit(state, environment, draft),

            DeskAction::Update { id, patch } => match state.get_mut(&id) {
                Some(reservation) => {
                    patch.apply_to(reservation);
                    let reservation = reservation.clone();
                    smallvec![Effect::Publish(DeskAction::ReservationUpdated {
                        reservation
                    })]
                },
                None => {
                    tracing::debug!(%id, "update for unknown reservation ignored");
                    smallvec![Effect::None]
                },
            },

            DeskAction::Delete { id } => {
                if state.remove(&id).is_some() {
                    smallvec![Effect::Publish(DeskAction::ReservationDeleted { id })]
                } else {
                    tracing::debug!(%id, "delete for unknown reservation ignored");
                    smallvec![Effect::None]
                }
            },

            DeskAction::ArrivalTick => {
                if environment.entropy.sample() < ARRIVAL_PROBABILITY {
                    let draft = arrivals::synthesize_arrival(
                        environment.clock.as_ref(),
                        environment.entropy.as_ref(),
                    );
                    Self::admit(state, environment, draft)
                } else {
                    smallvec![Effect::None]
                }
            },

            // Events are outputs of this reducer; receiving one as input is
            // a no-op (there is no replay path).
            DeskAction::ReservationCreated { .. }
            | DeskAction::ReservationUpdated { .. }
            | DeskAction::ReservationDeleted { .. } => smallvec![Effect::None],
        }
    }
}
