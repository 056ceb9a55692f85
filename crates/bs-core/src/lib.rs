//! `bs-core` — foundational types for the bikeshare simulation.
//!
//! This crate is a dependency of every other `bs-*` crate.  It intentionally
//! has no `bs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `BikeId`, `SiteId`, `PersonId`                      |
//! | [`bike`]    | `BikeType`, the `Bike` value                        |
//! | [`rng`]     | `PersonRng` (per-person), `SimRng` (global)         |
//! | [`timing`]  | `TravelTimes` — ride/walk/van duration sampling     |
//! | [`config`]  | `SimConfig`, `VanPolicy`                            |
//! | [`error`]   | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod bike;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod timing;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bike::{Bike, BikeType};
pub use config::{SimConfig, VanPolicy};
pub use error::{CoreError, CoreResult};
pub use ids::{BikeId, PersonId, SiteId};
pub use rng::{PersonRng, SimRng};
pub use timing::TravelTimes;
