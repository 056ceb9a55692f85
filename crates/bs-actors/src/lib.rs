//! `bs-actors` — the agents that drive the stations.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`network`] | `StationNetwork` — fixed registry of shared stations    |
//! | [`person`]  | `Person` — borrow / ride / deposit / walk loop          |
//! | [`van`]     | `Van` — depot loading and target-band rebalancing       |
//!
//! Actors are plain sequential loops; all synchronization lives inside
//! [`Station`][bs_station::Station].  Each actor owns its RNG and its
//! in-hand/cargo bikes outright, so nothing here needs a lock of its own.

pub mod network;
pub mod person;
pub mod van;


pub use network::StationNetwork;
pub use person::Person;
pub use van::Van;
