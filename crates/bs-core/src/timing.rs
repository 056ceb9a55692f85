//! Travel-duration sampling.
//!
//! Every journey in the simulation is a timed sleep, never a lock-holding
//! wait.  `TravelTimes` holds the sampling bounds so tests can shrink every
//! delay to microseconds while the demo runs at human speed.
//!
//! A base duration is drawn uniformly from `[travel_min_ms, travel_max_ms]`;
//! rides and walks add a fixed mode surcharge on top (walking the same leg
//! takes longer than riding it).  The van's hop between sites is just the
//! base draw.

use std::time::Duration;

use rand::Rng;
use rand::rngs::SmallRng;

/// Sampling bounds for ride, walk, and van-hop durations.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelTimes {
    /// Lower bound of the uniform base draw, in milliseconds.
    pub travel_min_ms: u64,
    /// Upper bound (inclusive) of the uniform base draw, in milliseconds.
    pub travel_max_ms: u64,
    /// Added to the base draw for a bike ride.
    pub ride_extra_ms: u64,
    /// Added to the base draw for a walk.
    pub walk_extra_ms: u64,
}

impl Default for TravelTimes {
    fn default() -> Self {
        Self {
            travel_min_ms: 500,
            travel_max_ms: 1_500,
            ride_extra_ms: 1_000,
            walk_extra_ms: 2_000,
        }
    }
}

impl TravelTimes {
    /// A configuration where every journey is near-instant, for tests.
    pub fn instant() -> Self {
        Self {
            travel_min_ms: 0,
            travel_max_ms: 1,
            ride_extra_ms: 0,
            walk_extra_ms: 0,
        }
    }

    fn base(&self, rng: &mut SmallRng) -> u64 {
        let lo = self.travel_min_ms.min(self.travel_max_ms);
        let hi = self.travel_min_ms.max(self.travel_max_ms);
        rng.gen_range(lo..=hi)
    }

    /// Duration of one bike ride between two sites.
    pub fn ride(&self, rng: &mut SmallRng) -> Duration {
        Duration::from_millis(self.base(rng) + self.ride_extra_ms)
    }

    /// Duration of one walk between two sites.
    pub fn walk(&self, rng: &mut SmallRng) -> Duration {
        Duration::from_millis(self.base(rng) + self.walk_extra_ms)
    }

    /// Duration of one van hop between two sites.
    pub fn van_trip(&self, rng: &mut SmallRng) -> Duration {
        Duration::from_millis(self.base(rng))
    }
}
