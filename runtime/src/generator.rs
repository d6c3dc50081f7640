//! Background simulator of reservations arriving from an external channel.
//!
//! The generator is an explicit, cancellable task: a [`Ticker`] paces it, and
//! each tick sends [`DeskAction::ArrivalTick`] through the store, where the
//! desk reducer rolls the arrival probability and synthesizes the record.
//! Tests inject a manual ticker and run the whole pipeline without wall-clock
//! delays; production uses [`IntervalTicker::standard`] at the 30-second
//! cadence.

use crate::store::ReservationStore;
use frontdesk_core::arrivals::ARRIVAL_INTERVAL;
use frontdesk_core::desk::DeskAction;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Paces the arrival generator.
///
/// `tick` resolves once per period; returning `false` ends the generator
/// loop (a manual test ticker does this when its driver is dropped).
pub trait Ticker: Send + 'static {
    /// Waits for the next tick
    fn tick(&mut self) -> impl Future<Output = bool> + Send;
}

/// Production ticker backed by `tokio::time::interval`
#[derive(Debug)]
pub struct IntervalTicker {
    interval: tokio::time::Interval,
}

impl IntervalTicker {
    /// Creates a ticker with a custom period; the first tick fires one full
    /// period after creation
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // interval() yields immediately on the first tick; push it out one
        // full period to match a plain recurring timer.
        interval.reset();
        Self { interval }
    }

    /// Creates a ticker at the standard arrival cadence
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ARRIVAL_INTERVAL)
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Handle owning the spawned generator task.
///
/// Dropping the handle aborts the task, so the recurring timer can never
/// outlive the scope that started it.
#[derive(Debug)]
pub struct GeneratorHandle {
    task: JoinHandle<()>,
}

impl GeneratorHandle {
    /// Stops the generator immediately
    pub fn stop(self) {
        self.task.abort();
    }

    /// Whether the generator loop has exited on its own
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for GeneratorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns the arrival generator on the current tokio runtime.
///
/// The loop runs until the ticker reports exhaustion, the store shuts down,
/// or the handle is stopped/dropped.
#[must_use]
pub fn spawn_arrival_generator<T: Ticker>(
    store: ReservationStore,
    mut ticker: T,
) -> GeneratorHandle {
    let task = tokio::spawn(async move {
        tracing::info!("arrival generator started");
        loop {
            if !ticker.tick().await {
                tracing::info!("arrival generator ticker exhausted");
                break;
            }

            metrics::counter!("frontdesk.generator.ticks").increment(1);

            if store.send(DeskAction::ArrivalTick).await.is_err() {
                tracing::info!("arrival generator stopping: store shut down");
                break;
            }
        }
    });

    GeneratorHandle { task }
}
