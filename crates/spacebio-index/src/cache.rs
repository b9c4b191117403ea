//! Time-boxed memoization of one resource.
//!
//! A cache is Empty until its first load, Valid while the entry is younger than the TTL and
//! Stale afterwards. Reading an Empty or Stale cache reloads it synchronously before serving.
//! A failed load installs the fallback value with a fresh timestamp, so a failing loader is
//! consulted at most once per TTL.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use tracing::{debug, error};

use crate::{Clock, IndexError, SystemClock};

/// Observable state of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing loaded yet.
    Empty,
    /// Loaded and younger than the TTL.
    Valid,
    /// Loaded but at least as old as the TTL.
    Stale,
}

impl CacheState {
    /// Returns a human-readable description for display.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Valid => "valid",
            Self::Stale => "stale",
        }
    }

    /// Returns true if the next read reloads.
    pub fn needs_load(&self) -> bool {
        !matches!(self, Self::Valid)
    }
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A loaded value and when it was installed.
struct Entry<T> {
    /// Shared value.
    value: Arc<T>,
    /// Install time.
    loaded_at: Instant,
}

/// Caches one value for a fixed time-to-live.
pub struct TtlCache<T> {
    /// Resource name used in log events.
    name: &'static str,
    /// Time-to-live of an entry.
    ttl: Duration,
    /// Time source.
    clock: Arc<dyn Clock>,
    /// Current entry. The lock is held across check-then-reload.
    entry: Mutex<Option<Entry<T>>>,
}

impl<T> TtlCache<T> {
    /// Creates an empty cache on the system clock.
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self::with_clock(name, ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache on the given clock.
    pub fn with_clock(name: &'static str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            ttl,
            clock,
            entry: Mutex::new(None),
        }
    }

    /// Resource name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Locks the entry, recovering from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, Option<Entry<T>>> {
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `entry` is still fresh at `now`.
    fn is_fresh(&self, entry: &Entry<T>, now: Instant) -> bool {
        now.saturating_duration_since(entry.loaded_at) < self.ttl
    }

    /// Current state.
    pub fn state(&self) -> CacheState {
        match &*self.lock() {
            None => CacheState::Empty,
            Some(entry) if self.is_fresh(entry, self.clock.now()) => CacheState::Valid,
            Some(_) => CacheState::Stale,
        }
    }

    /// Age of the current entry, if any.
    pub fn age(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.lock()
            .as_ref()
            .map(|entry| now.saturating_duration_since(entry.loaded_at))
    }

    /// Returns the cached value, loading it first when Empty or Stale.
    ///
    /// When `load` fails the error is logged and `fallback()` is installed instead. Concurrent
    /// callers wait on the lock, so one expiry triggers one load.
    pub fn get_or_load<L, F>(&self, load: L, fallback: F) -> Arc<T>
    where
        L: FnOnce() -> Result<T, IndexError>,
        F: FnOnce() -> T,
    {
        let mut guard = self.lock();
        if let Some(entry) = guard.as_ref()
            && self.is_fresh(entry, self.clock.now())
        {
            return Arc::clone(&entry.value);
        }

        debug!(cache = self.name, "loading");
        let value = match load() {
            Ok(value) => value,
            Err(e) => {
                error!(cache = self.name, error = %e, "load failed, serving fallback data");
                fallback()
            }
        };
        let value = Arc::new(value);
        *guard = Some(Entry {
            value: Arc::clone(&value),
            loaded_at: self.clock.now(),
        });
        value
    }

    /// Drops the current entry; the next read reloads.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }
}

impl<T> fmt::Debug for TtlCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .field("state", &self.state())
            .finish()
    }
}
