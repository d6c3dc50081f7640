//! The core trait for business logic.
//!
//! Reducers are pure functions: `(State, Action, Environment) → Effects`.
//! They mutate the state in place, return the effects the runtime should
//! execute, and never perform I/O themselves.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait - core abstraction for business logic
///
/// # Example
///
/// ```
/// use frontdesk_core::desk::{DeskAction, DeskEnvironment, DeskReducer};
/// use frontdesk_core::reducer::Reducer;
/// use frontdesk_core::state::DeskState;
///
/// let reducer = DeskReducer::new();
/// let mut state = DeskState::new();
/// let env = DeskEnvironment::system();
/// let effects = reducer.reduce(
///     &mut state,
///     DeskAction::Delete { id: "missing".into() },
///     &env,
/// );
/// assert!(effects.iter().all(frontdesk_core::effect::Effect::is_none));
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects
    ///
    /// # Arguments
    ///
    /// - `state`: Mutable reference to current state
    /// - `action`: The action to process
    /// - `environment`: Reference to injected dependencies
    ///
    /// # Returns
    ///
    /// The effects to be executed by the runtime, in order
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
