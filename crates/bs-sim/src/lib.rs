//! `bs-sim` — wiring and lifecycle for the bikeshare simulation.
//!
//! # Lifecycle
//!
//! ```text
//! SimBuilder::new(config).reporter(r).build()?   validate, build stations,
//!                                                seed the depot
//! sim.start()?                                   one thread per person,
//!                                                one van thread
//! running.shutdown()                             van stop flag → station
//!                                                shutdown broadcast → join
//! ```
//!
//! Shutdown ordering matters: the van's cooperative stop flag is raised
//! first (it never blocks on a station, so a flag is enough), then every
//! station broadcasts its shutdown so each blocked person wakes, observes
//! the closed outcome, and exits its loop.  Only then are threads joined.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bs_core::SimConfig;
//! use bs_sim::SimBuilder;
//!
//! let sim = SimBuilder::new(SimConfig::default()).build()?;
//! let running = sim.start()?;
//! std::thread::sleep(std::time::Duration::from_secs(30));
//! let report = running.shutdown();
//! println!("{} bikes still racked", report.bikes_racked);
//! ```

pub mod builder;
pub mod error;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use sim::{RunningSim, Sim, SimReport};
