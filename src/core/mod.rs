pub mod dispatch;
pub mod errors;
pub mod eta;
pub mod event;
pub mod event_scheduler;
pub mod execution;
pub mod orders;
pub mod simulation_engine;
pub mod types;
