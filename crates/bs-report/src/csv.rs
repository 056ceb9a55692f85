//! CSV reporting sink.
//!
//! Appends every event as one row of `events.csv` in the configured
//! directory.  Columns: `event, actor, from_site, to_site, bikes,
//! duration_ms, message` — unused columns are left empty per event kind.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use csv::Writer;

use bs_core::{PersonId, SiteId};

use crate::error::{ReportError, ReportResult};
use crate::reporter::{Actor, Reporter};

struct CsvState {
    writer: Writer<File>,
    /// First write error, kept until [`CsvReporter::take_error`] — reporter
    /// methods have no return value, so failures surface after the run.
    last_error: Option<ReportError>,
}

/// Writes simulation events to a single CSV file.
///
/// The reporter is called from every actor thread, so the writer sits
/// behind a `Mutex`.  Event rows are short; contention is negligible next
/// to the actors' travel sleeps.
pub struct CsvReporter {
    inner: Mutex<CsvState>,
}

impl CsvReporter {
    /// Open (or create) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut writer = Writer::from_path(dir.join("events.csv"))?;
        writer.write_record([
            "event",
            "actor",
            "from_site",
            "to_site",
            "bikes",
            "duration_ms",
            "message",
        ])?;
        Ok(Self {
            inner: Mutex::new(CsvState { writer, last_error: None }),
        })
    }

    /// Take the stored write error (if any) after the simulation ends.
    ///
    /// Returns `None` if all writes succeeded so far.
    pub fn take_error(&self) -> Option<ReportError> {
        let mut state = self.inner.lock().expect("csv reporter mutex poisoned");
        state.last_error.take()
    }

    /// Flush buffered rows to disk.  Idempotent.
    pub fn flush(&self) -> ReportResult<()> {
        let mut state = self.inner.lock().expect("csv reporter mutex poisoned");
        state.writer.flush()?;
        Ok(())
    }

    fn write_row(&self, row: [&str; 7]) {
        let mut state = self.inner.lock().expect("csv reporter mutex poisoned");
        if let Err(e) = state.writer.write_record(row) {
            // Keep only the first error.
            if state.last_error.is_none() {
                state.last_error = Some(e.into());
            }
        }
    }
}

impl Reporter for CsvReporter {
    fn bike_count(&self, site: SiteId, total: usize) {
        self.write_row([
            "bike_count",
            "",
            &site.0.to_string(),
            "",
            &total.to_string(),
            "",
            "",
        ]);
    }

    fn ride(&self, person: PersonId, from: SiteId, to: SiteId, duration: Duration) {
        self.write_row([
            "ride",
            &Actor::Person(person).to_string(),
            &from.0.to_string(),
            &to.0.to_string(),
            "",
            &duration.as_millis().to_string(),
            "",
        ]);
    }

    fn walk(&self, person: PersonId, from: SiteId, to: SiteId, duration: Duration) {
        self.write_row([
            "walk",
            &Actor::Person(person).to_string(),
            &from.0.to_string(),
            &to.0.to_string(),
            "",
            &duration.as_millis().to_string(),
            "",
        ]);
    }

    fn van_trip(&self, from: SiteId, to: SiteId, duration: Duration) {
        self.write_row([
            "van_trip",
            &Actor::Van.to_string(),
            &from.0.to_string(),
            &to.0.to_string(),
            "",
            &duration.as_millis().to_string(),
            "",
        ]);
    }

    fn note(&self, actor: Actor, message: &str) {
        self.write_row(["note", &actor.to_string(), "", "", "", "", message]);
    }
}
