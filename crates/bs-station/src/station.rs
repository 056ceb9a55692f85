//! The `Station` monitor.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use bs_core::{Bike, BikeType};

use crate::error::{StationError, StationResult};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of a blocking [`Station::put`].
#[derive(Debug, PartialEq, Eq)]
pub enum PutOutcome {
    /// The bike was stored in its type's rack.
    Stored,
    /// The station refused the bike — it is shutting down, or the bike's
    /// type index is outside the station's configured range.  The bike is
    /// handed back; it is never silently swallowed by the station.
    Refused(Bike),
}

/// Result of a blocking [`Station::get`].
#[derive(Debug, PartialEq, Eq)]
pub enum GetOutcome {
    /// A bike of the requested type, in FIFO order of deposit.
    Taken(Bike),
    /// The station shut down while the rack was still empty.  Signals the
    /// caller that the simulation is ending; no bike will ever arrive.
    Closed,
}

// ── Station ───────────────────────────────────────────────────────────────────

/// Everything the station lock protects: the per-type racks and the one-way
/// `ending` flag.
struct StationState {
    /// One FIFO rack per bike type.
    racks: Vec<VecDeque<Bike>>,
    /// Set exactly once by [`Station::shutdown`]; never reset.
    ending: bool,
}

impl StationState {
    /// Total bikes across all racks.  Call only with the lock held — every
    /// public entry point already has it.
    fn total(&self) -> usize {
        self.racks.iter().map(VecDeque::len).sum()
    }
}

/// A thread-safe bike station with bounded total capacity.
///
/// One mutex guards all station state; capacity spans all types, so the
/// lock is per-station rather than per-rack.  One condition variable per
/// type signals "a bike of this type is available"; a single shared one
/// signals "a slot is free".
pub struct Station {
    capacity: usize,
    inner: Mutex<StationState>,
    /// Indexed by bike type; a taker of type `t` waits on `bike_ready[t]`.
    bike_ready: Vec<Condvar>,
    /// Putters of any type wait here when the station is full.
    slot_freed: Condvar,
}

impl Station {
    /// Create an empty station holding at most `capacity` bikes across
    /// `types` racks.
    pub fn new(capacity: usize, types: usize) -> Self {
        debug_assert!(types > 0, "a station needs at least one bike type");
        Self {
            capacity,
            inner: Mutex::new(StationState {
                racks: (0..types).map(|_| VecDeque::new()).collect(),
                ending: false,
            }),
            bike_ready: (0..types).map(|_| Condvar::new()).collect(),
            slot_freed: Condvar::new(),
        }
    }

    /// Number of configured bike types.
    pub fn types(&self) -> usize {
        self.bike_ready.len()
    }

    /// The fixed capacity bound.  Immutable, so no lock is taken.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // ── Blocking single-bike operations ───────────────────────────────────

    /// Deposit one bike, blocking while the station is full.
    ///
    /// Returns [`PutOutcome::Refused`] without storing if the station is
    /// already shutting down, begins shutting down while this call is
    /// blocked, or the bike's type index is out of range.
    pub fn put(&self, bike: Bike) -> PutOutcome {
        if !bike.kind.in_range(self.types()) {
            return PutOutcome::Refused(bike);
        }

        let mut state = self.inner.lock().expect("station mutex poisoned");
        if state.ending {
            return PutOutcome::Refused(bike);
        }

        // Mesa-style wait: re-check the predicate after every wake, since
        // another putter may have claimed the freed slot first.
        while state.total() >= self.capacity && !state.ending {
            state = self.slot_freed.wait(state).expect("condvar wait failed");
        }
        if state.ending {
            return PutOutcome::Refused(bike);
        }

        let kind = bike.kind;
        state.racks[kind.index()].push_back(bike);
        // At most one blocked taker of this type can use the new bike.
        self.bike_ready[kind.index()].notify_one();
        PutOutcome::Stored
    }

    /// Take the oldest bike of `kind`, blocking while that rack is empty.
    ///
    /// Returns [`GetOutcome::Closed`] if the station shuts down before a
    /// bike of that type arrives.  An out-of-range `kind` is an error and
    /// never blocks.
    pub fn get(&self, kind: BikeType) -> StationResult<GetOutcome> {
        if !kind.in_range(self.types()) {
            return Err(StationError::TypeOutOfRange { kind, types: self.types() });
        }

        let mut state = self.inner.lock().expect("station mutex poisoned");
        loop {
            if let Some(bike) = state.racks[kind.index()].pop_front() {
                // One slot opened up; any type's blocked putter may proceed.
                self.slot_freed.notify_one();
                return Ok(GetOutcome::Taken(bike));
            }
            if state.ending {
                return Ok(GetOutcome::Closed);
            }
            state = self.bike_ready[kind.index()]
                .wait(state)
                .expect("condvar wait failed");
        }
    }

    // ── Non-blocking batch operations (for the van) ───────────────────────

    /// Insert as many of `bikes` as capacity allows, in input order, without
    /// ever blocking.  Returns the bikes that did not fit, in their original
    /// relative order; ownership of rejects reverts to the caller.
    ///
    /// A shutting-down station rejects the entire batch.  Bikes with an
    /// out-of-range type are skipped and returned with the rejects.
    pub fn add_bikes(&self, bikes: Vec<Bike>) -> Vec<Bike> {
        let mut state = self.inner.lock().expect("station mutex poisoned");
        if state.ending {
            return bikes;
        }

        let mut rejected = Vec::new();
        for bike in bikes {
            if bike.kind.in_range(self.types()) && state.total() < self.capacity {
                let kind = bike.kind;
                state.racks[kind.index()].push_back(bike);
                // Signal per insert: each new bike serves one taker of that
                // type; a blanket broadcast would over-wake.
                self.bike_ready[kind.index()].notify_one();
            } else {
                rejected.push(bike);
            }
        }
        rejected
    }

    /// Remove up to `n` bikes without blocking, scanning types in ascending
    /// order and draining each rack FIFO before moving to the next.
    ///
    /// Returns however many bikes were actually available (possibly none).
    /// Behaves identically before and during shutdown.
    pub fn get_bikes(&self, n: usize) -> Vec<Bike> {
        let mut state = self.inner.lock().expect("station mutex poisoned");

        let mut taken = Vec::new();
        for rack in state.racks.iter_mut() {
            while taken.len() < n {
                match rack.pop_front() {
                    Some(bike) => taken.push(bike),
                    None => break,
                }
            }
            if taken.len() >= n {
                break;
            }
        }

        // A batch removal can free many slots at once, unblocking putters of
        // several types — notify_one would under-wake.
        if !taken.is_empty() {
            self.slot_freed.notify_all();
        }
        taken
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Number of bikes of `kind` currently racked.
    pub fn count_of(&self, kind: BikeType) -> StationResult<usize> {
        if !kind.in_range(self.types()) {
            return Err(StationError::TypeOutOfRange { kind, types: self.types() });
        }
        let state = self.inner.lock().expect("station mutex poisoned");
        Ok(state.racks[kind.index()].len())
    }

    /// Total bikes currently racked.  Best-effort read: true at some instant
    /// during the call, possibly stale by the time the caller acts on it.
    pub fn total(&self) -> usize {
        let state = self.inner.lock().expect("station mutex poisoned");
        state.total()
    }

    // ── Shutdown ──────────────────────────────────────────────────────────

    /// Begin shutting down: set the one-way `ending` flag and wake every
    /// waiter on every condition so no thread stays blocked in `put`/`get`.
    ///
    /// Idempotent — a second call finds the flag already set and merely
    /// re-broadcasts, which is harmless.
    pub fn shutdown(&self) {
        let mut state = self.inner.lock().expect("station mutex poisoned");
        state.ending = true;
        for ready in &self.bike_ready {
            ready.notify_all();
        }
        self.slot_freed.notify_all();
    }
}
