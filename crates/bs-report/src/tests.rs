//! Unit tests for the reporting sinks.

use std::time::Duration;

use bs_core::{PersonId, SiteId};

use crate::{Actor, CsvReporter, NoopReporter, Reporter};

#[cfg(test)]
mod noop {
    use super::*;

    #[test]
    fn accepts_every_event() {
        let reporter = NoopReporter;
        reporter.bike_count(SiteId(0), 3);
        reporter.ride(PersonId(1), SiteId(0), SiteId(1), Duration::from_millis(5));
        reporter.walk(PersonId(1), SiteId(1), SiteId(2), Duration::from_millis(5));
        reporter.van_trip(SiteId(2), SiteId(0), Duration::from_millis(5));
        reporter.note(Actor::Van, "resting");
    }
}

#[cfg(test)]
mod actor_display {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Actor::Person(PersonId(3)).to_string(), "person 3");
        assert_eq!(Actor::Van.to_string(), "van");
    }
}

#[cfg(test)]
mod csv_sink {
    use super::*;

    fn read_lines(dir: &std::path::Path) -> Vec<String> {
        let raw = std::fs::read_to_string(dir.join("events.csv")).expect("read events.csv");
        raw.lines().map(str::to_owned).collect()
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let reporter = CsvReporter::new(dir.path()).expect("create reporter");

        reporter.bike_count(SiteId(2), 4);
        reporter.ride(PersonId(0), SiteId(0), SiteId(1), Duration::from_millis(1500));
        reporter.note(Actor::Van, "cycle done");
        reporter.flush().expect("flush");
        assert!(reporter.take_error().is_none());

        let lines = read_lines(dir.path());
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "event,actor,from_site,to_site,bikes,duration_ms,message"
        );
        assert_eq!(lines[1], "bike_count,,2,,4,,");
        assert_eq!(lines[2], "ride,person 0,0,1,,1500,");
        assert_eq!(lines[3], "note,van,,,,,cycle done");
    }

    #[test]
    fn is_safe_to_share_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempfile::tempdir().expect("tempdir");
        let reporter = Arc::new(CsvReporter::new(dir.path()).expect("create reporter"));

        let handles: Vec<_> = (0..4)
            .map(|p| {
                let reporter = Arc::clone(&reporter);
                thread::spawn(move || {
                    for i in 0..25 {
                        reporter.bike_count(SiteId(p), i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        reporter.flush().expect("flush");
        assert!(reporter.take_error().is_none());
        // Header + 4 × 25 rows, each a complete line.
        assert_eq!(read_lines(dir.path()).len(), 101);
    }
}
