pub mod core;

// Re-export commonly used types
pub use crate::core::dispatch::{Dispatcher, FifoStrategy, MatchedStrategy, Pairing, PairingStrategy};
pub use crate::core::errors::SimError;
pub use crate::core::eta::EtaSource;
pub use crate::core::event::{
    CourierArrivalEvent, Event, EventKind, FoodPrepEvent, OrderEvent, PickupEvent,
};
pub use crate::core::event_scheduler::EventScheduler;
pub use crate::core::execution::{run_batch, ConcurrencyMode, SimulationConfig, StrategyKind};
pub use crate::core::simulation_engine::{RunSummary, Simulation, SimulationObserver};
pub use crate::core::types::{Order, SimTime};
