pub mod batch;
pub mod config;
pub mod pacing;

// Re-export commonly used types
pub use batch::run_batch;
pub use config::{ConcurrencyMode, SimulationConfig, StrategyKind};
pub use pacing::RealTimePacer;
