use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Simulation time in seconds since the simulation origin
pub type SimTime = f64;

/// An order as submitted by a customer
///
/// Orders are immutable once loaded; events share them through `Arc<Order>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Order {
    pub id: String,
    pub name: String,
    /// Seconds between submission and the food being ready
    pub prep_time: f64,
}

impl Order {
    /// Create an order with a freshly generated id
    pub fn new(name: impl Into<String>, prep_time: f64) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, prep_time)
    }

    /// Create an order with a caller supplied id
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, prep_time: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prep_time,
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
