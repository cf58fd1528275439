use super::traits::{Pairing, PairingStrategy};
use crate::core::event::{CourierArrivalEvent, FoodPrepEvent};
use log::{debug, warn};
use std::collections::HashMap;

/// Pairs food and courier only when they were created for the same order
///
/// An order id sits in at most one of the two pending maps at a time.
#[derive(Debug, Default)]
pub struct MatchedStrategy {
    pending_food_prep: HashMap<String, FoodPrepEvent>,
    pending_courier_arrival: HashMap<String, CourierArrivalEvent>,
}

impl MatchedStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PairingStrategy for MatchedStrategy {
    fn name(&self) -> &'static str {
        "matched"
    }

    fn pair_food_prep(&mut self, event: FoodPrepEvent) -> Option<Pairing> {
        if let Some(courier) = self.pending_courier_arrival.remove(&event.order.id) {
            debug!("matched food prep for {} with waiting courier", event.order.id);
            return Some(Pairing::new(event, courier));
        }

        let id = event.order.id.clone();
        if self.pending_food_prep.insert(id, event).is_some() {
            warn!("replaced an unresolved food prep for a repeated order id");
        }
        None
    }

    fn pair_courier_arrival(&mut self, event: CourierArrivalEvent) -> Option<Pairing> {
        if let Some(food) = self.pending_food_prep.remove(&event.order.id) {
            debug!("matched courier for {} with waiting food", event.order.id);
            return Some(Pairing::new(food, event));
        }

        let id = event.order.id.clone();
        if self.pending_courier_arrival.insert(id, event).is_some() {
            warn!("replaced an unresolved courier arrival for a repeated order id");
        }
        None
    }

    fn pending_food_preps(&self) -> usize {
        self.pending_food_prep.len()
    }

    fn pending_courier_arrivals(&self) -> usize {
        self.pending_courier_arrival.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Order;
    use std::sync::Arc;

    fn order(id: &str) -> Arc<Order> {
        Arc::new(Order::with_id(id, id, 1.0))
    }

    #[test]
    fn test_pairs_by_order_identity() {
        let mut strategy = MatchedStrategy::new();
        let a = order("a");
        let b = order("b");

        assert!(strategy.pair_food_prep(FoodPrepEvent::new(1.0, Arc::clone(&a))).is_none());
        assert!(strategy
            .pair_courier_arrival(CourierArrivalEvent::new(2.0, Arc::clone(&b)))
            .is_none());
        assert_eq!(strategy.pending_food_preps(), 1);
        assert_eq!(strategy.pending_courier_arrivals(), 1);

        let pairing = strategy
            .pair_courier_arrival(CourierArrivalEvent::new(3.0, Arc::clone(&a)))
            .expect("courier for a should find a's food");
        assert_eq!(pairing.food_prep.order, a);
        assert_eq!(pairing.courier_arrival.order, a);
        assert_eq!(pairing.pickup_time(), 3.0);

        let pairing = strategy
            .pair_food_prep(FoodPrepEvent::new(4.0, Arc::clone(&b)))
            .expect("food for b should find b's courier");
        assert_eq!(pairing.courier_arrival.time, 2.0);
        assert_eq!(strategy.pending_food_preps(), 0);
        assert_eq!(strategy.pending_courier_arrivals(), 0);
    }

    #[test]
    fn test_same_side_signals_never_pair() {
        let mut strategy = MatchedStrategy::new();
        assert!(strategy.pair_food_prep(FoodPrepEvent::new(1.0, order("a"))).is_none());
        assert!(strategy.pair_food_prep(FoodPrepEvent::new(2.0, order("b"))).is_none());
        assert_eq!(strategy.pending_food_preps(), 2);
    }
}
