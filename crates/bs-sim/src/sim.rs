//! The `Sim` struct, its worker threads, and the shutdown protocol.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use bs_actors::{Person, StationNetwork, Van};
use bs_core::{Bike, PersonId, SimConfig, SimRng, SiteId};
use bs_report::Reporter;

use crate::SimResult;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// A fully built, not-yet-started simulation.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config: SimConfig,
    network: Arc<StationNetwork>,
    reporter: Arc<dyn Reporter>,
}

impl Sim {
    pub(crate) fn new(
        config: SimConfig,
        network: Arc<StationNetwork>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self { config, network, reporter }
    }

    /// The station registry (shared, contents-mutable only).
    pub fn network(&self) -> &Arc<StationNetwork> {
        &self.network
    }

    /// Spawn every worker: one named thread per person plus the van thread.
    ///
    /// People start round-robin across the public sites so early borrows
    /// don't all pile onto site 0.
    pub fn start(self) -> SimResult<RunningSim> {
        let mut root_rng = SimRng::new(self.config.seed);
        let stop_van = Arc::new(AtomicBool::new(false));

        let mut people = Vec::with_capacity(self.config.people);
        for i in 0..self.config.people {
            let network = Arc::clone(&self.network);
            let reporter = Arc::clone(&self.reporter);
            let mut person = Person::new(
                PersonId(i as u32),
                self.config.seed,
                SiteId((i % self.config.sites) as u32),
                self.config.bike_types,
                self.config.travel.clone(),
            );
            let handle = thread::Builder::new()
                .name(format!("person-{i}"))
                .spawn(move || person.run(&network, reporter.as_ref()))?;
            people.push(handle);
        }

        let van = {
            let network = Arc::clone(&self.network);
            let reporter = Arc::clone(&self.reporter);
            let stop = Arc::clone(&stop_van);
            let mut van = Van::new(
                self.config.van.clone(),
                self.config.travel.clone(),
                root_rng.child(1),
                self.config.depot(),
                self.config.site_target(),
            );
            thread::Builder::new()
                .name("van".into())
                .spawn(move || van.run(&network, reporter.as_ref(), &stop))?
        };

        Ok(RunningSim { network: self.network, stop_van, people, van })
    }
}

// ── RunningSim ────────────────────────────────────────────────────────────────

/// Handle to a live simulation.  Dropping it without calling
/// [`shutdown`][Self::shutdown] detaches the workers; always shut down.
pub struct RunningSim {
    network: Arc<StationNetwork>,
    stop_van: Arc<AtomicBool>,
    people: Vec<JoinHandle<()>>,
    van: JoinHandle<Vec<Bike>>,
}

/// What was left when the simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimReport {
    /// Person threads that exited cleanly (a shortfall means a panic).
    pub people_joined: usize,
    /// Bikes still racked across all stations, depot included.
    pub bikes_racked: usize,
    /// Bikes still aboard the van when it parked.
    pub undelivered_cargo: usize,
}

impl RunningSim {
    /// The station registry, e.g. for live occupancy reads.
    pub fn network(&self) -> &Arc<StationNetwork> {
        &self.network
    }

    /// Stop everything and wait for every worker to exit.
    ///
    /// Ordering: raise the van's cooperative stop flag, then broadcast
    /// shutdown on every station so each blocked person wakes into the
    /// closed outcome, then join.  No worker can stay blocked: the van
    /// never blocks, and stations guarantee their waiters are released.
    pub fn shutdown(self) -> SimReport {
        self.stop_van.store(true, Ordering::Release);
        self.network.shutdown_all();

        let mut people_joined = 0;
        for handle in self.people {
            if handle.join().is_ok() {
                people_joined += 1;
            }
        }
        let undelivered = self.van.join().unwrap_or_default();

        let bikes_racked = self.network.iter().map(|(_, s)| s.total()).sum();
        SimReport {
            people_joined,
            bikes_racked,
            undelivered_cargo: undelivered.len(),
        }
    }
}
