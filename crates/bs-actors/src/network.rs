//! The fixed registry of stations shared by every worker.
//!
//! Built once before any actor thread starts and never structurally
//! mutated afterwards — only each station's contents change, under that
//! station's own lock.  Workers receive the registry behind an `Arc`
//! instead of reaching for process-wide statics.

use std::sync::Arc;

use bs_core::{PersonRng, SimConfig, SiteId};
use bs_station::Station;

/// All stations of the simulation: public sites first, the depot last.
pub struct StationNetwork {
    stations: Vec<Arc<Station>>,
    depot: SiteId,
}

impl StationNetwork {
    /// Construct empty stations per `config`: `config.sites` public sites of
    /// `slots_per_site` capacity plus one depot of `depot_slots`.
    pub fn from_config(config: &SimConfig) -> Self {
        let mut stations: Vec<Arc<Station>> = (0..config.sites)
            .map(|_| Arc::new(Station::new(config.slots_per_site, config.bike_types)))
            .collect();
        stations.push(Arc::new(Station::new(config.depot_slots, config.bike_types)));
        Self { stations, depot: config.depot() }
    }

    /// Number of public sites (depot excluded).
    pub fn public_sites(&self) -> usize {
        self.stations.len() - 1
    }

    /// Number of stations, depot included.
    pub fn total_sites(&self) -> usize {
        self.stations.len()
    }

    /// The depot's site id.
    pub fn depot(&self) -> SiteId {
        self.depot
    }

    /// The station at `site`.
    ///
    /// # Panics
    /// Panics if `site` is out of range; site ids originate from this
    /// registry, so an invalid one is a programming error.
    pub fn station(&self, site: SiteId) -> &Arc<Station> {
        &self.stations[site.index()]
    }

    /// The depot's station.
    pub fn depot_station(&self) -> &Arc<Station> {
        &self.stations[self.depot.index()]
    }

    /// Iterate every station paired with its site id, depot included.
    pub fn iter(&self) -> impl Iterator<Item = (SiteId, &Arc<Station>)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (SiteId(i as u32), s))
    }

    /// A uniformly random public site different from `exclude`.
    ///
    /// People never travel to the depot, and always to a *distinct* site.
    pub fn random_public_site_except(&self, rng: &mut PersonRng, exclude: SiteId) -> SiteId {
        let publics = self.public_sites();
        if exclude.index() >= publics {
            // `exclude` is the depot or out of range: any public site works.
            return SiteId(rng.gen_range(0..publics) as u32);
        }
        // Draw from the remaining publics - 1 sites and skip past `exclude`.
        let mut pick = rng.gen_range(0..publics - 1);
        if pick >= exclude.index() {
            pick += 1;
        }
        SiteId(pick as u32)
    }

    /// Shut every station down, waking all blocked actors.
    pub fn shutdown_all(&self) {
        for station in &self.stations {
            station.shutdown();
        }
    }
}
