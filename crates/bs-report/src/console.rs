//! Console reporting sink.

use std::time::Duration;

use bs_core::{PersonId, SiteId};

use crate::reporter::{Actor, Reporter};

/// Prints one line per event to stdout.
///
/// `println!` serialises through stdlib's own stdout lock, so concurrent
/// calls interleave by whole lines, never mid-line.
pub struct ConsoleReporter;

fn secs(d: Duration) -> f64 {
    d.as_secs_f64()
}

impl Reporter for ConsoleReporter {
    fn bike_count(&self, site: SiteId, total: usize) {
        println!("site {:<3} now holds {total} bikes", site.0);
    }

    fn ride(&self, person: PersonId, from: SiteId, to: SiteId, duration: Duration) {
        println!(
            "person {} rides {} -> {} ({:.1}s)",
            person.0,
            from.0,
            to.0,
            secs(duration)
        );
    }

    fn walk(&self, person: PersonId, from: SiteId, to: SiteId, duration: Duration) {
        println!(
            "person {} walks {} -> {} ({:.1}s)",
            person.0,
            from.0,
            to.0,
            secs(duration)
        );
    }

    fn van_trip(&self, from: SiteId, to: SiteId, duration: Duration) {
        println!("van drives {} -> {} ({:.1}s)", from.0, to.0, secs(duration));
    }

    fn note(&self, actor: Actor, message: &str) {
        println!("[{actor}] {message}");
    }
}
