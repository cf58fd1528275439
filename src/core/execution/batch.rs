use super::config::{ConcurrencyMode, SimulationConfig};
use crate::core::errors::SimError;
use crate::core::simulation_engine::{RunSummary, Simulation};
use crate::core::types::Order;
use log::debug;
use rayon::prelude::*;

/// Run one independent discrete simulation per config over the same orders
///
/// The first config's concurrency settings decide how the batch executes.
/// Results come back in config order either way.
pub fn run_batch(orders: &[Order], configs: &[SimulationConfig]) -> Result<Vec<RunSummary>, SimError> {
    for config in configs {
        config.validate()?;
    }
    let Some(first) = configs.first() else {
        return Ok(Vec::new());
    };

    match first.concurrency_mode {
        ConcurrencyMode::Sequential => configs.iter().map(|config| run_one(orders, config)).collect(),
        ConcurrencyMode::Rayon => {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(size) = first.thread_pool_size {
                builder = builder.num_threads(size);
            }
            let pool = builder
                .build()
                .map_err(|e| SimError::ThreadPool(e.to_string()))?;
            debug!("running {} simulations on {} threads", configs.len(), pool.current_num_threads());

            pool.install(|| configs.par_iter().map(|config| run_one(orders, config)).collect())
        }
    }
}

fn run_one(orders: &[Order], config: &SimulationConfig) -> Result<RunSummary, SimError> {
    let mut sim = Simulation::from_config(config)?.discrete();
    sim.add_orders(orders.iter().cloned(), config.start_time, config.order_interval)?;
    Ok(sim.run())
}
