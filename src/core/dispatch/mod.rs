pub mod dispatcher;
pub mod fifo;
pub mod matched;
pub mod traits;

// Re-export commonly used types
pub use dispatcher::{Dispatcher, EventHistory};
pub use fifo::FifoStrategy;
pub use matched::MatchedStrategy;
pub use traits::{Pairing, PairingStrategy};
