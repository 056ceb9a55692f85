//! citybike — a small runnable bikeshare simulation.
//!
//! Six riders circulate between four sites while the maintenance van keeps
//! every site inside its occupancy band, all at human-watchable speed.
//! Every event is printed to the console; tweak the constants below to make
//! the town bigger or busier.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use bs_core::{BikeType, SimConfig, SiteId, TravelTimes, VanPolicy};
use bs_report::ConsoleReporter;
use bs_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SITES:          usize = 4;
const SLOTS_PER_SITE: usize = 5;
const DEPOT_SLOTS:    usize = 20;
const BIKE_TYPES:     usize = 3;
const PEOPLE:         usize = 6;
const INITIAL_BIKES:  usize = 15;
const SEED:           u64   = 42;
const RUN_SECS:       u64   = 30;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== citybike — bikeshare simulation ===");
    println!("Sites: {SITES} (+depot)  |  People: {PEOPLE}  |  Bikes: {INITIAL_BIKES}  |  Seed: {SEED}");
    println!();

    // 1. Configuration.
    let config = SimConfig {
        sites:          SITES,
        slots_per_site: SLOTS_PER_SITE,
        depot_slots:    DEPOT_SLOTS,
        bike_types:     BIKE_TYPES,
        people:         PEOPLE,
        initial_bikes:  INITIAL_BIKES,
        seed:           SEED,
        van:            VanPolicy::default(),
        travel:         TravelTimes::default(),
    };

    // 2. Build and start.
    let sim = SimBuilder::new(config)
        .reporter(Arc::new(ConsoleReporter))
        .build()?;
    let running = sim.start()?;

    // 3. Let the town live for a while.
    thread::sleep(Duration::from_secs(RUN_SECS));

    // 4. Shut down: stop the van, close every station, join the workers.
    println!();
    println!("--- closing time ---");
    let network = Arc::clone(running.network());
    let report = running.shutdown();

    // 5. Final occupancy table.
    println!();
    println!("{:<8} {:>8} {:>10}", "Site", "Bikes", "Capacity");
    println!("{}", "-".repeat(28));
    for (site, station) in network.iter() {
        let label = if site == network.depot() {
            "depot".to_string()
        } else {
            site.0.to_string()
        };
        println!("{label:<8} {:>8} {:>10}", station.total(), station.capacity());
    }
    println!();
    for t in 0..BIKE_TYPES {
        let kind = BikeType(t as u8);
        let per_type: usize = (0..network.total_sites())
            .map(|s| {
                network
                    .station(SiteId(s as u32))
                    .count_of(kind)
                    .unwrap_or(0)
            })
            .sum();
        println!("{kind}: {per_type} racked");
    }
    println!();
    println!(
        "{} riders joined, {} bikes racked, {} still in the van",
        report.people_joined, report.bikes_racked, report.undelivered_cargo
    );

    Ok(())
}
