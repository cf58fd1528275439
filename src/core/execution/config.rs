//! Configuration for dispatch simulation runs
//!
//! This module provides the knobs the driver consumes: which pairing strategy
//! to use, how courier etas are produced, whether time is paced against the
//! wall clock, and how batches of runs are executed.

use crate::core::errors::SimError;
use serde::{Deserialize, Serialize};

/// Built-in pairing strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Couriers only pick up the order they were dispatched for
    #[default]
    Matched,
    /// Couriers are pooled and take whatever food has waited longest
    Fifo,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Matched => f.write_str("matched"),
            StrategyKind::Fifo => f.write_str("fifo"),
        }
    }
}

/// Enumeration of supported concurrency modes for batch runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// Runs execute one after another on the calling thread
    #[default]
    Sequential,
    /// Runs execute concurrently on a Rayon pool
    Rayon,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Pairing strategy for the dispatcher
    pub strategy: StrategyKind,
    /// Fixed courier eta in seconds; disables the random draw
    pub eta: Option<f64>,
    /// Seed for the random eta draw; entropy when absent
    pub seed: Option<u64>,
    /// Pace events against the wall clock; false is discrete mode
    pub realtime: bool,
    /// Prefix event lines with wall-clock seconds since start
    pub show_timestamps: bool,
    /// Emit one `info!` line per processed event
    pub report_events: bool,
    /// Submission time of the first loaded order
    pub start_time: f64,
    /// Gap between consecutive loaded orders
    pub order_interval: f64,
    /// How batches of runs are executed
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel batches
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
}

impl SimulationConfig {
    /// Create a new configuration with default values
    ///
    /// Defaults: matched strategy, random eta, real-time pacing, orders every half second from t=0.
    pub fn new() -> Self {
        Self {
            strategy: StrategyKind::default(),
            eta: None,
            seed: None,
            realtime: true,
            show_timestamps: false,
            report_events: true,
            start_time: 0.0,
            order_interval: 0.5,
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Use a fixed courier eta
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = Some(eta);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Skip real-time pacing and advance purely by event timestamps
    pub fn discrete(mut self) -> Self {
        self.realtime = false;
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.show_timestamps = enabled;
        self
    }

    pub fn with_event_reporting(mut self, enabled: bool) -> Self {
        self.report_events = enabled;
        self
    }

    /// Set when the first order arrives and the spacing between orders
    pub fn with_order_schedule(mut self, start_time: f64, order_interval: f64) -> Self {
        self.start_time = start_time;
        self.order_interval = order_interval;
        self
    }

    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel batches
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Reject values the driver cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        if let Some(eta) = self.eta {
            check_non_negative("eta", eta)?;
        }
        check_non_negative("start_time", self.start_time)?;
        check_non_negative("order_interval", self.order_interval)?;
        if self.thread_pool_size == Some(0) {
            return Err(SimError::InvalidConfig(
                "thread_pool_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn check_non_negative(field: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
