//! The person agent: borrow a bike, ride, deposit, walk, repeat.

use std::thread;

use bs_core::{BikeType, PersonId, PersonRng, SiteId, TravelTimes};
use bs_report::{Actor, Reporter};
use bs_station::{GetOutcome, PutOutcome};

use crate::network::StationNetwork;

/// One simulated rider.  Runs on its own thread; owns its RNG, its current
/// position, and (while riding) one bike.
pub struct Person {
    id: PersonId,
    /// Drawn once at construction, uniformly over the configured types.
    preferred: BikeType,
    current: SiteId,
    rng: PersonRng,
    travel: TravelTimes,
}

impl Person {
    /// Create a person starting at `start`, with a preferred bike type
    /// drawn from this person's deterministic RNG.
    pub fn new(
        id: PersonId,
        global_seed: u64,
        start: SiteId,
        bike_types: usize,
        travel: TravelTimes,
    ) -> Self {
        let mut rng = PersonRng::new(global_seed, id);
        let preferred = BikeType(rng.gen_range(0..bike_types) as u8);
        Self { id, preferred, current: start, rng, travel }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn preferred(&self) -> BikeType {
        self.preferred
    }

    /// The travel loop.  Returns when a borrow observes station shutdown.
    pub fn run(&mut self, network: &StationNetwork, reporter: &dyn Reporter) {
        reporter.note(
            Actor::Person(self.id),
            &format!("starting at site {}, prefers {}", self.current.0, self.preferred),
        );

        loop {
            // Borrow (blocks until a bike of the preferred type arrives).
            let station = network.station(self.current);
            let bike = match station.get(self.preferred) {
                Ok(GetOutcome::Taken(bike)) => bike,
                // Closed: the simulation is ending.  A type error cannot
                // happen for a type drawn from the configured range, but it
                // is equally terminal for this rider.
                Ok(GetOutcome::Closed) | Err(_) => break,
            };
            reporter.bike_count(self.current, station.total());

            // Ride to a distinct destination.
            let destination = network.random_public_site_except(&mut self.rng, self.current);
            let ride = self.travel.ride(self.rng.inner());
            reporter.ride(self.id, self.current, destination, ride);
            thread::sleep(ride);
            self.current = destination;

            // Deposit (blocks until a slot frees).
            let station = network.station(destination);
            match station.put(bike) {
                PutOutcome::Stored => reporter.bike_count(destination, station.total()),
                PutOutcome::Refused(_) => {
                    // Shutdown raced the deposit.  The bike is abandoned and
                    // the next borrow will observe Closed.
                    reporter.note(Actor::Person(self.id), "deposit refused, station closing");
                }
            }

            // Walk on to a third site.
            let next = network.random_public_site_except(&mut self.rng, self.current);
            let walk = self.travel.walk(self.rng.inner());
            reporter.walk(self.id, self.current, next, walk);
            thread::sleep(walk);
            self.current = next;
        }

        reporter.note(Actor::Person(self.id), "simulation over");
    }
}
