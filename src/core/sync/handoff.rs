/*!
 * Single-Slot Handoff Channel
 *
 * Blocking rendezvous between one producer and one consumer through a
 * shared slot of capacity one. The producer cannot overwrite an unread
 * value and the consumer cannot observe an empty slot; both park instead.
 *
 * # Design: One Mutex, Two Condvars
 *
 * The slot is an `Option<T>` guarded by a single `parking_lot::Mutex`.
 * Occupancy is the `Option` itself, so there is no sentinel value and any
 * payload (including zero) is transmissible. Two condvars split the wait
 * sets by direction:
 * - `not_full`: putters park here while the slot is occupied
 * - `not_empty`: takers park here while the slot is empty
 *
 * Every state check and transition happens while holding the mutex, and
 * every wait re-checks its predicate in a loop after waking, so neither
 * spurious wake-ups nor waiter races can break the EMPTY/FULL alternation.
 * Each successful transition notifies exactly one waiter on the opposite
 * side.
 */

use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Result type for bounded-wait handoff operations
pub type HandoffResult<T> = Result<T, HandoffError>;

/// Bounded-wait handoff errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffError {
    #[error("handoff wait timed out")]
    Timeout,
}

/// Timed-out `put_timeout`, returning ownership of the undelivered value
#[derive(Error, Debug, PartialEq, Eq)]
#[error("slot still occupied after timeout")]
pub struct PutTimeoutError<T>(pub T);

/// Completed operation counters (for diagnostics)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandoffStats {
    pub puts: u64,
    pub takes: u64,
}

/// Synchronized container holding zero or one value
///
/// The channel itself carries all of the synchronization; callers loop over
/// plain `put`/`take` calls with no locking of their own.
///
/// # Examples
///
/// ```
/// use handoff::Handoff;
/// use std::sync::Arc;
/// use std::thread;
///
/// let slot = Arc::new(Handoff::new());
/// let producer = slot.clone();
///
/// let handle = thread::spawn(move || producer.put(7u64));
///
/// assert_eq!(slot.take(), 7);
/// handle.join().unwrap();
/// ```
pub struct Handoff<T> {
    /// `Some` while a value is pending, `None` once drained
    slot: Mutex<Option<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    puts: AtomicU64,
    takes: AtomicU64,
}

impl<T> Handoff<T> {
    /// Create an empty channel
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            puts: AtomicU64::new(0),
            takes: AtomicU64::new(0),
        }
    }

    /// Store a value, blocking until the slot is empty
    ///
    /// Wakes one pending `take` once the value is in place. Cannot fail,
    /// only delay.
    pub fn put(&self, value: T) {
        let mut slot = self.slot.lock();
        while slot.is_some() {
            self.not_full.wait(&mut slot);
        }
        *slot = Some(value);
        drop(slot);
        self.puts.fetch_add(1, Ordering::Relaxed);
        self.not_empty.notify_one();
    }

    /// Remove and return the pending value, blocking until one arrives
    ///
    /// Wakes one pending `put` once the slot is drained. Cannot fail, only
    /// delay.
    pub fn take(&self) -> T {
        let mut slot = self.slot.lock();
        loop {
            if let Some(value) = slot.take() {
                drop(slot);
                self.takes.fetch_add(1, Ordering::Relaxed);
                self.not_full.notify_one();
                return value;
            }
            self.not_empty.wait(&mut slot);
        }
    }

    /// Non-blocking put: `Err(value)` if the slot is occupied
    pub fn try_put(&self, value: T) -> Result<(), T> {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            return Err(value);
        }
        *slot = Some(value);
        drop(slot);
        self.puts.fetch_add(1, Ordering::Relaxed);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Non-blocking take: `None` if the slot is empty
    pub fn try_take(&self) -> Option<T> {
        let mut slot = self.slot.lock();
        let value = slot.take()?;
        drop(slot);
        self.takes.fetch_add(1, Ordering::Relaxed);
        self.not_full.notify_one();
        Some(value)
    }

    /// Bounded-wait put
    ///
    /// Blocks at most `timeout` for the slot to drain. On timeout the
    /// undelivered value is handed back to the caller. A slot that drains
    /// exactly at the deadline still accepts the value.
    pub fn put_timeout(&self, value: T, timeout: Duration) -> Result<(), PutTimeoutError<T>> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.slot.lock();
        while slot.is_some() {
            if self.not_full.wait_until(&mut slot, deadline).timed_out() && slot.is_some() {
                return Err(PutTimeoutError(value));
            }
        }
        *slot = Some(value);
        drop(slot);
        self.puts.fetch_add(1, Ordering::Relaxed);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Bounded-wait take
    ///
    /// Blocks at most `timeout` for a value to arrive. A value that lands
    /// exactly at the deadline is still delivered, never dropped.
    pub fn take_timeout(&self, timeout: Duration) -> HandoffResult<T> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.slot.lock();
        loop {
            if let Some(value) = slot.take() {
                drop(slot);
                self.takes.fetch_add(1, Ordering::Relaxed);
                self.not_full.notify_one();
                return Ok(value);
            }
            if self.not_empty.wait_until(&mut slot, deadline).timed_out() && slot.is_none() {
                return Err(HandoffError::Timeout);
            }
        }
    }

    /// Snapshot of the occupancy flag (diagnostics only)
    ///
    /// The answer may be stale by the time the caller acts on it; the
    /// blocking operations never rely on it.
    pub fn is_occupied(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Completed operation counters
    pub fn stats(&self) -> HandoffStats {
        HandoffStats {
            puts: self.puts.load(Ordering::Relaxed),
            takes: self.takes.load(Ordering::Relaxed),
        }
    }
}

impl<T> Default for Handoff<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_empty() {
        let handoff = Handoff::<u64>::new();
        assert!(!handoff.is_occupied());
        assert_eq!(handoff.stats(), HandoffStats::default());
    }

    #[test]
    fn test_try_paths_toggle_state() {
        let handoff = Handoff::new();

        assert_eq!(handoff.try_take(), None);
        assert!(handoff.try_put(5u64).is_ok());
        assert!(handoff.is_occupied());

        // Occupied slot rejects the second value untouched
        assert_eq!(handoff.try_put(6), Err(6));

        assert_eq!(handoff.try_take(), Some(5));
        assert!(!handoff.is_occupied());
    }

    #[test]
    fn test_stats_count_completed_ops() {
        let handoff = Handoff::new();
        handoff.put(1u64);
        assert_eq!(handoff.take(), 1);
        handoff.put(2);
        assert_eq!(handoff.take(), 2);

        let stats = handoff.stats();
        assert_eq!(stats.puts, 2);
        assert_eq!(stats.takes, 2);
    }

    #[test]
    fn test_rejected_try_put_not_counted() {
        let handoff = Handoff::new();
        handoff.put(1u64);
        assert_eq!(handoff.try_put(2), Err(2));
        assert_eq!(handoff.stats().puts, 1);
    }

    #[test]
    fn test_take_timeout_empty() {
        let handoff = Handoff::<u64>::new();
        let start = Instant::now();

        let result = handoff.take_timeout(Duration::from_millis(50));

        assert_eq!(result, Err(HandoffError::Timeout));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_put_timeout_returns_value() {
        let handoff = Handoff::new();
        handoff.put(1u64);

        let err = handoff
            .put_timeout(2, Duration::from_millis(50))
            .unwrap_err();
        assert_eq!(err.0, 2);

        // The first value is still pending
        assert_eq!(handoff.take(), 1);
    }

    #[test]
    fn test_timeout_paths_succeed_when_fed() {
        let handoff = Arc::new(Handoff::new());
        let producer = handoff.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            producer.put(7u64);
        });

        let value = handoff.take_timeout(Duration::from_secs(1));
        assert_eq!(value, Ok(7));
        handle.join().unwrap();
    }

    #[test]
    fn test_cross_thread_ping_pong() {
        let handoff = Arc::new(Handoff::new());
        let producer = handoff.clone();

        let handle = thread::spawn(move || {
            for value in 1u64..=100 {
                producer.put(value);
            }
        });

        for expected in 1u64..=100 {
            assert_eq!(handoff.take(), expected);
        }

        handle.join().unwrap();
        assert!(!handoff.is_occupied());
    }
}
