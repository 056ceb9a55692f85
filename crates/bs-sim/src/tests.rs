//! Unit tests for the builder and the thread lifecycle.

use std::time::Duration;

use bs_core::{BikeType, SimConfig, TravelTimes, VanPolicy};

use crate::{SimBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fast_config() -> SimConfig {
    SimConfig {
        sites:          3,
        slots_per_site: 4,
        depot_slots:    12,
        bike_types:     2,
        people:         3,
        initial_bikes:  8,
        seed:           42,
        van: VanPolicy {
            rest: Duration::from_millis(1),
            ..VanPolicy::default()
        },
        travel: TravelTimes::instant(),
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let config = SimConfig { sites: 1, ..fast_config() };
        assert!(matches!(
            SimBuilder::new(config).build(),
            Err(SimError::Core(_))
        ));
    }

    #[test]
    fn seeds_the_depot_round_robin() {
        let config = SimConfig { initial_bikes: 6, bike_types: 2, ..fast_config() };
        let sim = SimBuilder::new(config).build().expect("build");

        let depot = sim.network().depot_station();
        assert_eq!(depot.total(), 6);
        assert_eq!(depot.count_of(BikeType(0)).unwrap(), 3);
        assert_eq!(depot.count_of(BikeType(1)).unwrap(), 3);
        // Public sites start empty; only the van distributes stock.
        for s in 0..sim.network().public_sites() {
            assert_eq!(
                sim.network().station(bs_core::SiteId(s as u32)).total(),
                0
            );
        }
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn start_then_shutdown_joins_everyone() {
        let config = fast_config();
        let people = config.people;
        let initial = config.initial_bikes;

        let sim = SimBuilder::new(config).build().expect("build");
        let running = sim.start().expect("start");

        // Let the workers churn for a moment.
        std::thread::sleep(Duration::from_millis(150));

        let report = running.shutdown();
        assert_eq!(report.people_joined, people);

        // Every bike is racked or aboard the van, except at most one
        // in-hand bike per person abandoned by a shutdown-refused deposit.
        let accounted = report.bikes_racked + report.undelivered_cargo;
        assert!(accounted <= initial, "accounted {accounted} > initial {initial}");
        assert!(
            accounted + people >= initial,
            "lost more bikes ({}) than people ({people})",
            initial - accounted
        );
    }

    #[test]
    fn capacity_invariant_holds_at_rest() {
        let sim = SimBuilder::new(fast_config()).build().expect("build");
        let running = sim.start().expect("start");
        std::thread::sleep(Duration::from_millis(100));

        for (_, station) in running.network().iter() {
            assert!(station.total() <= station.capacity());
        }

        running.shutdown();
    }

    #[test]
    fn shutdown_is_prompt_even_with_starved_riders() {
        // No bikes at all: every person blocks on the first borrow.
        let config = SimConfig { initial_bikes: 0, ..fast_config() };
        let people = config.people;

        let sim = SimBuilder::new(config).build().expect("build");
        let running = sim.start().expect("start");
        std::thread::sleep(Duration::from_millis(50));

        let report = running.shutdown();
        assert_eq!(report.people_joined, people);
        assert_eq!(report.bikes_racked, 0);
        assert_eq!(report.undelivered_cargo, 0);
    }
}
