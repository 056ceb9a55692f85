//! `bs-station` — the thread-safe bounded bike station.
//!
//! A [`Station`] is a capacity-limited container of bikes partitioned by
//! type: one FIFO rack per [`BikeType`][bs_core::BikeType], with blocking
//! single-bike operations for people, non-blocking batch operations for the
//! van, and a one-way shutdown that releases every blocked caller.
//!
//! The station performs no I/O and knows nothing about the agents that call
//! it; reporting happens in the caller after a successful state change.
//!
//! # Blocking model
//!
//! `put` and `get` suspend the calling thread on a condition variable while
//! their predicate is false, releasing the station lock for the duration.
//! Waits are Mesa-style: every wake re-checks the predicate *and* the
//! shutdown flag in a loop, so spurious or raced wake-ups are harmless.
//! `add_bikes` and `get_bikes` never suspend the caller.

pub mod error;
pub mod station;


pub use error::{StationError, StationResult};
pub use station::{GetOutcome, PutOutcome, Station};
