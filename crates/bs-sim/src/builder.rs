//! Builder for a ready-to-start [`Sim`].

use std::sync::Arc;

use bs_actors::StationNetwork;
use bs_core::{Bike, BikeId, BikeType, SimConfig};
use bs_report::{NoopReporter, Reporter};

use crate::sim::Sim;
use crate::{SimError, SimResult};

/// Validates the configuration, constructs the station registry, and seeds
/// the depot with the initial bike fleet.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .reporter(Arc::new(ConsoleReporter))
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    reporter: Option<Arc<dyn Reporter>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, reporter: None }
    }

    /// Supply the reporting sink.  Defaults to [`NoopReporter`].
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Validate, build the (henceforth immutable) station registry, and
    /// create `initial_bikes` bikes in the depot with sequential ids and
    /// round-robin types.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let network = StationNetwork::from_config(&self.config);

        let fleet: Vec<Bike> = (0..self.config.initial_bikes)
            .map(|i| {
                Bike::new(
                    BikeId(i as u32),
                    BikeType((i % self.config.bike_types) as u8),
                )
            })
            .collect();
        let rejected = network.depot_station().add_bikes(fleet);
        if !rejected.is_empty() {
            // validate() bounds initial_bikes by depot_slots, so a reject
            // here means the two checks have drifted apart.
            return Err(SimError::Config(format!(
                "depot rejected {} of the initial bikes",
                rejected.len()
            )));
        }

        Ok(Sim::new(
            self.config,
            Arc::new(network),
            self.reporter.unwrap_or_else(|| Arc::new(NoopReporter)),
        ))
    }
}
