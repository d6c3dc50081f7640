//! # Frontdesk Testing
//!
//! Deterministic mock implementations of the environment traits, a manual
//! ticker for driving the arrival generator without wall-clock delays, and a
//! fluent Given-When-Then harness for reducer tests.
//!
//! ## Example
//!
//! ```
//! use frontdesk_core::desk::{DeskAction, DeskReducer};
//! use frontdesk_core::state::DeskState;
//! use frontdesk_testing::{ReducerTest, assertions, test_environment};
//!
//! ReducerTest::new(DeskReducer::new())
//!     .with_env(test_environment())
//!     .given_state(DeskState::new())
//!     .when_action(DeskAction::Delete { id: "missing".into() })
//!     .then_state(|state| assert!(state.is_empty()))
//!     .then_effects(assertions::assert_no_events)
//!     .run();
//! ```

pub mod mocks;

pub use mocks::{
    FixedClock, ManualTicker, ScriptedEntropy, SequentialIdSource, TickerDriver, manual_ticker,
    test_clock, test_environment,
};
pub use reducer_test::{ReducerTest, assertions};
