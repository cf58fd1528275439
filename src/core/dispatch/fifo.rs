use super::traits::{Pairing, PairingStrategy};
use crate::core::event::{CourierArrivalEvent, FoodPrepEvent};
use log::debug;
use std::collections::VecDeque;

/// Pooled couriers: the oldest waiting food goes with the oldest waiting courier
///
/// Order identity is ignored, so a courier dispatched for one order may carry another.
#[derive(Debug, Default)]
pub struct FifoStrategy {
    pending_food_prep: VecDeque<FoodPrepEvent>,
    pending_courier_arrival: VecDeque<CourierArrivalEvent>,
}

impl FifoStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PairingStrategy for FifoStrategy {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn pair_food_prep(&mut self, event: FoodPrepEvent) -> Option<Pairing> {
        match self.pending_courier_arrival.pop_front() {
            Some(courier) => {
                debug!(
                    "food for {} taken by courier dispatched for {}",
                    event.order.id, courier.order.id
                );
                Some(Pairing::new(event, courier))
            }
            None => {
                self.pending_food_prep.push_back(event);
                None
            }
        }
    }

    fn pair_courier_arrival(&mut self, event: CourierArrivalEvent) -> Option<Pairing> {
        match self.pending_food_prep.pop_front() {
            Some(food) => {
                debug!(
                    "courier dispatched for {} takes food for {}",
                    event.order.id, food.order.id
                );
                Some(Pairing::new(food, event))
            }
            None => {
                self.pending_courier_arrival.push_back(event);
                None
            }
        }
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
    fn test_pairs_in_arrival_order_ignoring_identity() {
        let mut strategy = FifoStrategy::new();

        assert!(strategy.pair_food_prep(FoodPrepEvent::new(1.0, order("c"))).is_none());
        assert!(strategy.pair_food_prep(FoodPrepEvent::new(2.0, order("a"))).is_none());

        let first = strategy
            .pair_courier_arrival(CourierArrivalEvent::new(3.0, order("a")))
            .expect("oldest food should be taken");
        assert_eq!(first.food_prep.order.id, "c");
        assert_eq!(first.courier_arrival.order.id, "a");

        let second = strategy
            .pair_courier_arrival(CourierArrivalEvent::new(4.0, order("b")))
            .expect("remaining food should be taken");
        assert_eq!(second.food_prep.order.id, "a");
        assert_eq!(strategy.pending_food_preps(), 0);
    }

    #[test]
    fn test_couriers_queue_when_no_food_is_ready() {
        let mut strategy = FifoStrategy::new();
        assert!(strategy
            .pair_courier_arrival(CourierArrivalEvent::new(1.0, order("x")))
            .is_none());
        assert!(strategy
            .pair_courier_arrival(CourierArrivalEvent::new(2.0, order("y")))
            .is_none());
        assert_eq!(strategy.pending_courier_arrivals(), 2);

        let pairing = strategy
            .pair_food_prep(FoodPrepEvent::new(5.0, order("z")))
            .expect("waiting courier should take the food");
        assert_eq!(pairing.courier_arrival.order.id, "x");
        assert_eq!(pairing.pickup_time(), 5.0);
        assert_eq!(strategy.pending_courier_arrivals(), 1);
    }
}
