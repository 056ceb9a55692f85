//! The `Reporter` trait — the observation boundary of the simulation.

use std::fmt;
use std::time::Duration;

use bs_core::{PersonId, SiteId};

// ── Actor ─────────────────────────────────────────────────────────────────────

/// Identity tag attached to free-text notes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Actor {
    Person(PersonId),
    Van,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Person(id) => write!(f, "person {}", id.0),
            Actor::Van => write!(f, "van"),
        }
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Callbacks invoked by actors after state-changing station calls.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Implementations are called
/// concurrently from every actor thread, hence `Send + Sync` and `&self`
/// receivers — a sink that buffers must synchronise internally.
pub trait Reporter: Send + Sync {
    /// The bike count at `site` changed; `total` is the new count.
    fn bike_count(&self, _site: SiteId, _total: usize) {}

    /// `person` rides from `from` to `to`, taking `duration`.
    fn ride(&self, _person: PersonId, _from: SiteId, _to: SiteId, _duration: Duration) {}

    /// `person` walks from `from` to `to`, taking `duration`.
    fn walk(&self, _person: PersonId, _from: SiteId, _to: SiteId, _duration: Duration) {}

    /// The van drives from `from` to `to`, taking `duration`.
    fn van_trip(&self, _from: SiteId, _to: SiteId, _duration: Duration) {}

    /// Free-text log line from `actor`.
    fn note(&self, _actor: Actor, _message: &str) {}
}

/// A [`Reporter`] that discards everything.  Use when you need to run the
/// simulation but don't want observation output.
pub struct NoopReporter;

impl Reporter for NoopReporter {}
