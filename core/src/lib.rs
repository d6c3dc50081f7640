//! # Frontdesk Core
//!
//! Domain model and pure business logic for the Frontdesk hotel admin desk.
//!
//! This crate is the functional core of the system: reservation types, the
//! desk reducer, availability queries, and dashboard statistics. It performs
//! no I/O. Everything that touches the outside world (time, identifiers,
//! randomness) is reached through the traits in [`environment`] so that every
//! code path is deterministic under test.
//!
//! ## Core Concepts
//!
//! - **State**: [`state::DeskState`], the insertion-ordered reservation book
//! - **Action**: [`desk::DeskAction`], commands and the change events they produce
//! - **Reducer**: [`desk::DeskReducer`], pure function `(State, Action, Environment) → Effects`
//! - **Effect**: [`effect::Effect`], descriptions of what the runtime should do next
//! - **Environment**: [`desk::DeskEnvironment`], injected clock/id/entropy dependencies
//!
//! The imperative shell — the store that owns the state, the broadcast channel,
//! and the background arrival generator — lives in `frontdesk-runtime`.
//!
//! ## Example
//!
//! ```
//! use frontdesk_core::desk::{DeskAction, DeskEnvironment, DeskReducer};
//! use frontdesk_core::reducer::Reducer;
//! use frontdesk_core::state::DeskState;
//!
//! let env = DeskEnvironment::system();
//! let mut state = DeskState::new();
//! let reducer = DeskReducer::new();
//!
//! let effects = reducer.reduce(&mut state, DeskAction::ArrivalTick, &env);
//! assert!(effects.len() <= 1);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, NaiveDate, Utc};
pub use smallvec::{SmallVec, smallvec};

pub mod arrivals;
pub mod availability;
pub mod desk;
pub mod effect;
pub mod environment;
pub mod reducer;
pub mod reservation;
pub mod rooms;
pub mod seed;
pub mod state;
pub mod stats;
