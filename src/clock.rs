//! # Time Sources
//!
//! A [`Restaurant`](crate::model::Restaurant) never reads the wall clock directly.
//! It asks its [`Clock`], which is injected at construction time (or swapped later),
//! so open/closed checks can be driven with fixed instants in tests.
//!
//! - [`SystemClock`] - local wall-clock time, the default.
//! - [`FixedClock`] - always returns the same instant.
//! - [`ManualClock`] - a shared handle whose time can be moved while the restaurant is in use.
//! - Any `Fn() -> NaiveTime + Send + Sync` closure.

use chrono::{Local, NaiveTime};
use std::sync::{Arc, Mutex};

/// Source of the current time-of-day.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    pub fn at(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// A clock whose time is set explicitly.
///
/// Clones share the same underlying instant, so a test can keep one handle and
/// hand the other to a restaurant (or to a running actor) and move time between calls.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<NaiveTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, time: NaiveTime) {
        // A poisoned lock still holds a valid NaiveTime.
        let mut guard = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *guard = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveTime + Send + Sync,
{
    fn now(&self) -> NaiveTime {
        self()
    }
}
