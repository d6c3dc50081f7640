//! Injected dependency traits and their production implementations.
//!
//! The reducer reaches the outside world only through these traits: time via
//! [`Clock`], identifier minting via [`IdSource`], randomness via
//! [`Entropy`]. Deterministic test implementations live in
//! `frontdesk-testing`.

use crate::reservation::ReservationId;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock trait - abstracts time operations for testability
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date in UTC
    fn today(&self) -> chrono::NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh reservation identifiers.
///
/// Implementations must never return an id that collides with one they have
/// already handed out.
pub trait IdSource: Send + Sync {
    /// Mint the next identifier
    fn next_id(&self) -> ReservationId;
}

/// Production id source: current Unix milliseconds, forced strictly
/// monotonic.
///
/// Two calls within the same millisecond get consecutive values instead of
/// colliding, so ids stay unique even under bursts.
#[derive(Debug, Default)]
pub struct TimeBasedIdSource {
    last: AtomicI64,
}

impl TimeBasedIdSource {
    /// Creates a new source starting from the current time
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for TimeBasedIdSource {
    fn next_id(&self) -> ReservationId {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(if now > last { now } else { last + 1 })
            })
            .unwrap_or_else(|last| last);
        let assigned = if now > prev { now } else { prev + 1 };
        ReservationId::new(assigned.to_string())
    }
}

/// Source of uniform randomness for the arrival simulator.
///
/// `sample` is the only required method; the helpers derive discrete picks
/// from it so scripted test implementations can drive every decision from a
/// queue of plain floats.
pub trait Entropy: Send + Sync {
    /// A uniform sample in `[0, 1)`
    fn sample(&self) -> f64;

    /// A uniform index in `0..len`; returns 0 when `len` is 0
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // Note: truncation is the intended floor here; len is a small pool size
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        #[allow(clippy::cast_precision_loss)]
        let idx = (self.sample() * len as f64) as usize;
        idx.min(len - 1)
    }

    /// A uniform amount in `[lo, hi)`; returns `lo` when the range is empty
    fn between(&self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        // Note: truncation is the intended floor; spans fit in f64 comfortably
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        #[allow(clippy::cast_precision_loss)]
        let offset = (self.sample() * (hi - lo) as f64) as u64;
        lo + offset.min(hi - lo - 1)
    }
}

/// Production entropy backed by the thread-local rng
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEntropy;

impl Entropy for SystemEntropy {
    fn sample(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().r#gen::<f64>()
    }
}
