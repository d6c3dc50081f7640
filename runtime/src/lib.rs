//! # Frontdesk Runtime
//!
//! The imperative shell around `frontdesk-core`: the [`ReservationStore`]
//! that owns the reservation book and publishes change events, and the
//! background [arrival generator](generator) that simulates reservations
//! arriving from an external channel.
//!
//! ## Concurrency model
//!
//! All mutation serializes through the store's write lock, so the generator
//! task and user-initiated calls never interleave partial writes. Change
//! events are broadcast synchronously after the mutation that caused them,
//! in the order mutations were applied.
//!
//! ## Example
//!
//! ```no_run
//! use frontdesk_core::desk::DeskEnvironment;
//! use frontdesk_core::state::DeskState;
//! use frontdesk_runtime::generator::{IntervalTicker, spawn_arrival_generator};
//! use frontdesk_runtime::store::ReservationStore;
//!
//! # async fn example() {
//! let env = DeskEnvironment::system();
//! let store = ReservationStore::new(DeskState::new(), env);
//!
//! let generator = spawn_arrival_generator(store.clone(), IntervalTicker::standard());
//! let snapshot = store.list().await;
//! generator.stop();
//! # let _ = snapshot;
//! # }
//! ```

/// Error types for the store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during store operations.
    ///
    /// The desk itself has no recoverable error conditions (unknown-id
    /// update/delete are silent no-ops by contract); these errors belong to
    /// the runtime around it.
    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum StoreError {
        /// The store is shutting down and no longer accepts actions
        #[error("store is shutting down")]
        ShutdownInProgress,

        /// A create command produced no created event.
        ///
        /// The desk reducer always acknowledges a create, so this guards an
        /// internal invariant rather than an expected condition.
        #[error("create command was not acknowledged by the reducer")]
        CommandRejected,
    }
}

pub mod generator;
pub mod store;

pub use error::StoreError;
pub use generator::{GeneratorHandle, IntervalTicker, Ticker, spawn_arrival_generator};
pub use store::ReservationStore;
