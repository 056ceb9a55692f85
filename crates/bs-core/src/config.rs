//! Top-level simulation configuration.
//!
//! Typically built in code (or loaded from a TOML/JSON file by the
//! application crate with the `serde` feature) and handed to
//! `bs_sim::SimBuilder`.  Everything here is set once before any worker
//! thread starts; only station contents are mutable afterwards.

use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::ids::SiteId;
use crate::timing::TravelTimes;

// ── VanPolicy ─────────────────────────────────────────────────────────────────

/// Rebalancing-policy constants for the maintenance van.
///
/// `depot_batch` and `band_margin` are inherited policy constants with no
/// stated derivation; they are configuration, not tuned values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanPolicy {
    /// Maximum number of bikes the van can carry.
    pub cargo_capacity: usize,
    /// How many bikes to load from the depot at the start of each cycle.
    pub depot_batch: usize,
    /// Target site occupancy is `slots_per_site - band_margin`.
    pub band_margin: usize,
    /// Pause between rebalancing cycles.
    pub rest: Duration,
}

impl Default for VanPolicy {
    fn default() -> Self {
        Self {
            cargo_capacity: 4,
            depot_batch:    2,
            band_margin:    2,
            rest:           Duration::from_secs(2),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Full simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of public sites (excluding the depot).
    pub sites: usize,
    /// Rack capacity of each public site.
    pub slots_per_site: usize,
    /// Rack capacity of the depot.
    pub depot_slots: usize,
    /// Number of bike categories.  Fixed for the process lifetime.
    pub bike_types: usize,
    /// Number of person agents (one thread each).
    pub people: usize,
    /// Bikes created in the depot before any worker starts.
    pub initial_bikes: usize,
    /// Master RNG seed.  Per-person draws are reproducible for a given seed.
    pub seed: u64,
    /// Van rebalancing policy.
    pub van: VanPolicy,
    /// Ride/walk/van-hop duration bounds.
    pub travel: TravelTimes,
}

impl SimConfig {
    /// Total number of stations, depot included.
    #[inline]
    pub fn total_sites(&self) -> usize {
        self.sites + 1
    }

    /// The depot's site id — always the last index.
    #[inline]
    pub fn depot(&self) -> SiteId {
        SiteId(self.sites as u32)
    }

    /// The van's per-site occupancy target, `slots_per_site - band_margin`
    /// (saturating at zero).
    #[inline]
    pub fn site_target(&self) -> usize {
        self.slots_per_site.saturating_sub(self.van.band_margin)
    }

    /// Check every structural constraint the workers rely on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.sites < 2 {
            return Err(CoreError::Config(
                "at least 2 public sites are required (people always travel to a distinct site)"
                    .into(),
            ));
        }
        if self.slots_per_site == 0 {
            return Err(CoreError::Config("slots_per_site must be positive".into()));
        }
        if self.depot_slots == 0 {
            return Err(CoreError::Config("depot_slots must be positive".into()));
        }
        if self.bike_types == 0 || self.bike_types > u8::MAX as usize {
            return Err(CoreError::Config(format!(
                "bike_types must be in 1..={}, got {}",
                u8::MAX,
                self.bike_types
            )));
        }
        if self.initial_bikes > self.depot_slots {
            return Err(CoreError::Config(format!(
                "initial_bikes ({}) exceeds depot_slots ({})",
                self.initial_bikes, self.depot_slots
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sites:          4,
            slots_per_site: 5,
            depot_slots:    20,
            bike_types:     3,
            people:         6,
            initial_bikes:  15,
            seed:           42,
            van:            VanPolicy::default(),
            travel:         TravelTimes::default(),
        }
    }
}
