//! Mock implementations of the environment traits and the generator ticker.

use chrono::{DateTime, Utc};
use frontdesk_core::desk::DeskEnvironment;
use frontdesk_core::environment::{Clock, Entropy, IdSource};
use frontdesk_core::reservation::ReservationId;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Fixed clock for deterministic tests
///
/// Always returns the same time, making tests reproducible.
///
/// # Example
///
/// ```
/// use frontdesk_testing::FixedClock;
/// use frontdesk_core::environment::Clock;
/// use chrono::Utc;
///
/// let clock = FixedClock::new(Utc::now());
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// Predictable id source: "1", "2", "3", ...
///
/// Matches the ids the demo seed data uses, so tests can freely mix seeded
/// and freshly created reservations.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    next: AtomicU64,
}

impl SequentialIdSource {
    /// Creates a source whose first id is "1"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source whose first id is `start`
    #[must_use]
    pub const fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start.saturating_sub(1)),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> ReservationId {
        ReservationId::new((self.next.fetch_add(1, Ordering::Relaxed) + 1).to_string())
    }
}

/// Entropy that replays a scripted queue of samples.
///
/// Once the queue runs dry it returns the fallback value (default 1.0,
/// which fails the arrival probability roll, so an unscripted tick stays
/// quiet).
#[derive(Debug)]
pub struct ScriptedEntropy {
    samples: Mutex<VecDeque<f64>>,
    fallback: f64,
}

impl ScriptedEntropy {
    /// Creates entropy replaying `samples` in order
    #[must_use]
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: Mutex::new(samples.into_iter().collect()),
            fallback: 1.0,
        }
    }

    /// Creates an empty script with a custom fallback sample
    #[must_use]
    pub fn constant(fallback: f64) -> Self {
        Self {
            samples: Mutex::new(VecDeque::new()),
            fallback,
        }
    }
}

impl Entropy for ScriptedEntropy {
    fn sample(&self) -> f64 {
        self.samples
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(self.fallback)
    }
}

/// A ready-made deterministic environment: [`test_clock`], sequential ids
/// starting at "1", and entropy that never produces an arrival unless
/// scripted otherwise
#[must_use]
pub fn test_environment() -> DeskEnvironment {
    DeskEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdSource::new()),
        Arc::new(ScriptedEntropy::new([])),
    )
}

/// Test ticker driven explicitly from the test body.
///
/// Each [`TickerDriver::tick`] releases exactly one generator tick; dropping
/// the driver ends the generator loop cleanly.
#[derive(Debug)]
pub struct ManualTicker {
    ticks: mpsc::UnboundedReceiver<()>,
}

impl frontdesk_runtime::Ticker for ManualTicker {
    async fn tick(&mut self) -> bool {
        self.ticks.recv().await.is_some()
    }
}

/// Sending side of a [`ManualTicker`]
#[derive(Debug, Clone)]
pub struct TickerDriver {
    ticks: mpsc::UnboundedSender<()>,
}

impl TickerDriver {
    /// Releases one tick; returns `false` if the ticker is gone
    pub fn tick(&self) -> bool {
        self.ticks.send(()).is_ok()
    }
}

/// Creates a connected driver/ticker pair
#[must_use]
pub fn manual_ticker() -> (TickerDriver, ManualTicker) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TickerDriver { ticks: tx }, ManualTicker { ticks: rx })
}
