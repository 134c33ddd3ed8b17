/*!
 * Synchronization Primitives
 *
 * Blocking hand-off primitive for exactly two actors sharing a slot of
 * capacity one.
 *
 * # Architecture
 *
 * The single abstraction here is `Handoff<T>`: a monitor-style channel
 * that owns its mutex, its wait conditions, and the guarded-wait loops.
 * Callers never touch a lock; blocking and wake-up are internal to the
 * channel.
 */

mod handoff;

pub use handoff::{Handoff, HandoffError, HandoffResult, HandoffStats, PutTimeoutError};
