//! `bs-report` — reporting sinks for the bikeshare simulation.
//!
//! Actors (people and the van) report status after each successful station
//! call: the new bike count of the affected site, a travel event, or a
//! free-text note tagged with the actor's identity.  Reporting is purely
//! observational — nothing here feeds back into scheduling, and the station
//! crate takes no dependency on this one.
//!
//! Two sinks are provided:
//!
//! | Sink              | Output                                       |
//! |-------------------|----------------------------------------------|
//! | [`ConsoleReporter`] | one line per event on stdout               |
//! | [`CsvReporter`]     | `events.csv` via the `csv` crate           |
//!
//! Both implement [`Reporter`], whose methods all default to no-ops so
//! custom sinks override only what they care about.

pub mod console;
pub mod csv;
pub mod error;
pub mod reporter;

#[cfg(test)]
mod tests;

pub use console::ConsoleReporter;
pub use csv::CsvReporter;
pub use error::{ReportError, ReportResult};
pub use reporter::{Actor, NoopReporter, Reporter};
