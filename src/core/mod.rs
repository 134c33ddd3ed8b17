/*!
 * Core Module
 * Synchronization primitives at the heart of the crate
 */

pub mod sync;
