//! The `Bike` value and its type tag.
//!
//! A bike is an immutable value with no behavior.  It is owned by exactly
//! one place at a time — a station rack, the van's cargo, or a person's
//! hand — and ownership moves whole-value through station calls, so a bike
//! is never visible in two places at once.

use std::fmt;

use crate::BikeId;

// ── BikeType ──────────────────────────────────────────────────────────────────

/// A bike category index in `[0, bike_types)`.
///
/// The number of categories is runtime configuration
/// ([`SimConfig::bike_types`][crate::SimConfig]), fixed for the process
/// lifetime.  Stations validate the index on every typed operation; an
/// out-of-range value is reported, never indexed blindly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BikeType(pub u8);

impl BikeType {
    /// Cast to `usize` for direct use as a rack index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// `true` if this index is valid for a station with `types` categories.
    #[inline]
    pub fn in_range(self, types: usize) -> bool {
        self.index() < types
    }
}

impl fmt::Display for BikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.0)
    }
}

// ── Bike ──────────────────────────────────────────────────────────────────────

/// One bike: an identity plus an immutable type tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bike {
    pub id:   BikeId,
    pub kind: BikeType,
}

impl Bike {
    pub fn new(id: BikeId, kind: BikeType) -> Self {
        Self { id, kind }
    }
}

impl fmt::Display for Bike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bike {} ({})", self.id.0, self.kind)
    }
}
