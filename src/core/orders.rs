use super::errors::SimError;
use super::types::Order;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use uuid::Builder;

const MENU: &[&str] = &[
    "Banana Split",
    "McFlury",
    "Acai Bowl",
    "Cheese Pizza",
    "Pad Thai",
    "Poke Bowl",
    "Burrito",
    "Ramen",
];

/// Load orders from a JSON file
///
/// The file must hold an array of `{id, name, prepTime}` objects. Nothing is
/// returned unless every record is valid.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let orders: Vec<Order> = serde_json::from_str(&text).map_err(|source| SimError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_orders(&orders)?;
    debug!("loaded {} orders from {}", orders.len(), path.display());
    Ok(orders)
}

/// Parse and validate orders from JSON text
pub fn parse_orders(json: &str) -> Result<Vec<Order>, SimError> {
    let orders: Vec<Order> = serde_json::from_str(json).map_err(|source| SimError::Parse {
        path: "<inline>".into(),
        source,
    })?;
    validate_orders(&orders)?;
    Ok(orders)
}

/// Check the constraints serde cannot express
pub fn validate_orders(orders: &[Order]) -> Result<(), SimError> {
    let mut seen = HashSet::with_capacity(orders.len());

    for (index, order) in orders.iter().enumerate() {
        check_prep_time(index, order)?;
        if !seen.insert(order.id.as_str()) {
            return Err(SimError::DuplicateOrderId(order.id.clone()));
        }
    }

    Ok(())
}

/// Reject prep times that would put the food ahead of its own order
pub(crate) fn check_prep_time(index: usize, order: &Order) -> Result<(), SimError> {
    if order.prep_time.is_finite() && order.prep_time >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidOrder {
            index,
            reason: format!("prepTime must be a non-negative number, got {}", order.prep_time),
        })
    }
}

/// Generate `count` random orders, prep times drawn from `[1, 30)` seconds and rounded to a tenth
///
/// Ids are v4 uuids built from `rng`, so a seeded generator reproduces the whole list.
pub fn synthesize<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Order> {
    let prep_times = Uniform::new(1.0, 30.0);
    (0..count)
        .map(|_| {
            let name = MENU.choose(rng).copied().unwrap_or("Mystery Meal");
            let prep_time = (prep_times.sample(rng) * 10.0_f64).round() / 10.0;
            let id = Builder::from_random_bytes(rng.gen()).into_uuid();
            Order::with_id(id.to_string(), name, prep_time)
        })
        .collect()
}
