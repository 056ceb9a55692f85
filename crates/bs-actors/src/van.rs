//! The maintenance van: loads at the depot, pushes every public site
//! toward its target occupancy band, and flushes leftovers back home.
//!
//! The van only ever calls the stations' non-blocking batch operations, so
//! it keeps making progress under any contention.  Its cargo is owned by
//! the van thread alone and needs no synchronization.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use bs_core::{Bike, BikeType, SimRng, SiteId, TravelTimes, VanPolicy};
use bs_report::{Actor, Reporter};

use crate::network::StationNetwork;

/// The rebalancing vehicle.  One instance, one thread.
pub struct Van {
    cargo: Vec<Bike>,
    policy: VanPolicy,
    travel: TravelTimes,
    rng: SimRng,
    current: SiteId,
    /// Per-site occupancy target, `slots_per_site - band_margin`.
    site_target: usize,
}

impl Van {
    pub fn new(
        policy: VanPolicy,
        travel: TravelTimes,
        rng: SimRng,
        depot: SiteId,
        site_target: usize,
    ) -> Self {
        Self {
            cargo: Vec::with_capacity(policy.cargo_capacity),
            policy,
            travel,
            rng,
            current: depot,
            site_target,
        }
    }

    /// Bikes currently aboard.
    pub fn cargo_len(&self) -> usize {
        self.cargo.len()
    }

    /// Run rebalancing cycles until `stop` is observed at a cycle boundary.
    ///
    /// `stop` is cooperative and independent of station shutdown: the van
    /// never blocks on a station, so no wake-up machinery is needed —
    /// checking between work units is enough.  Returns whatever cargo was
    /// still aboard so the owner can account for every bike.
    pub fn run(
        &mut self,
        network: &StationNetwork,
        reporter: &dyn Reporter,
        stop: &AtomicBool,
    ) -> Vec<Bike> {
        while !stop.load(Ordering::Acquire) {
            self.cycle(network, reporter);
            thread::sleep(self.policy.rest);
        }
        reporter.note(Actor::Van, "stop requested, parking");
        std::mem::take(&mut self.cargo)
    }

    /// One full rebalancing cycle: load at the depot, balance every public
    /// site in ascending order, flush cargo back at the depot.
    pub fn cycle(&mut self, network: &StationNetwork, reporter: &dyn Reporter) {
        self.load_at_depot(network, reporter);
        for site in 0..network.public_sites() {
            let site = SiteId(site as u32);
            self.drive_to(site, reporter);
            self.balance_site(network, site, reporter);
        }
        self.return_to_depot(network, reporter);
    }

    // ── Cycle steps ───────────────────────────────────────────────────────

    fn drive_to(&mut self, destination: SiteId, reporter: &dyn Reporter) {
        if self.current == destination {
            return;
        }
        let trip = self.travel.van_trip(self.rng.inner());
        reporter.van_trip(self.current, destination, trip);
        thread::sleep(trip);
        self.current = destination;
    }

    /// Take up to `depot_batch` bikes from the depot, bounded by remaining
    /// cargo room.
    fn load_at_depot(&mut self, network: &StationNetwork, reporter: &dyn Reporter) {
        self.drive_to(network.depot(), reporter);

        let depot = network.depot_station();
        let room = self.policy.cargo_capacity.saturating_sub(self.cargo.len());
        let to_load = self.policy.depot_batch.min(room);
        if to_load > 0 {
            self.cargo.extend(depot.get_bikes(to_load));
        }
        reporter.bike_count(network.depot(), depot.total());
    }

    /// Pull a site's surplus above the target band, or push bikes toward it
    /// when below — covering types the site has none of first.
    fn balance_site(&mut self, network: &StationNetwork, site: SiteId, reporter: &dyn Reporter) {
        let station = network.station(site);
        let target = self.site_target;

        // Above the band: pull surplus, bounded by free cargo room.
        let stock = station.total();
        if stock > target && self.cargo.len() < self.policy.cargo_capacity {
            let surplus = stock - target;
            let room = self.policy.cargo_capacity - self.cargo.len();
            let pulled = station.get_bikes(surplus.min(room));
            if !pulled.is_empty() {
                reporter.note(
                    Actor::Van,
                    &format!("pulled {} surplus bikes from site {}", pulled.len(), site.0),
                );
            }
            self.cargo.extend(pulled);
        }

        // Below the band: push from cargo, missing types first.
        let stock = station.total();
        if stock < target && !self.cargo.is_empty() {
            let deficit = target - stock;
            let quota = deficit.min(self.cargo.len());
            let mut outgoing = Vec::with_capacity(quota);

            for t in 0..station.types() {
                if outgoing.len() >= quota {
                    break;
                }
                let kind = BikeType(t as u8);
                if station.count_of(kind).unwrap_or(0) == 0 {
                    if let Some(bike) = self.take_from_cargo(kind) {
                        outgoing.push(bike);
                    }
                }
            }
            while outgoing.len() < quota {
                match self.cargo.pop() {
                    Some(bike) => outgoing.push(bike),
                    None => break,
                }
            }

            if !outgoing.is_empty() {
                // The station may have filled up meanwhile; whatever it
                // rejects goes back aboard.
                let rejected = station.add_bikes(outgoing);
                self.cargo.extend(rejected);
            }
        }

        reporter.bike_count(site, station.total());
    }

    /// Flush all cargo into the depot, keeping whatever it rejects.
    fn return_to_depot(&mut self, network: &StationNetwork, reporter: &dyn Reporter) {
        self.drive_to(network.depot(), reporter);

        if !self.cargo.is_empty() {
            let depot = network.depot_station();
            let outgoing = std::mem::take(&mut self.cargo);
            self.cargo = depot.add_bikes(outgoing);
        }
        reporter.bike_count(network.depot(), network.depot_station().total());
    }

    /// Remove one bike of `kind` from cargo, if any.  Order aboard the van
    /// is irrelevant, so swap-removal is fine.
    fn take_from_cargo(&mut self, kind: BikeType) -> Option<Bike> {
        let pos = self.cargo.iter().position(|b| b.kind == kind)?;
        Some(self.cargo.swap_remove(pos))
    }
}
