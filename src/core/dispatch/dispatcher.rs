use super::fifo::FifoStrategy;
use super::matched::MatchedStrategy;
use super::traits::{Pairing, PairingStrategy};
use crate::core::event::{CourierArrivalEvent, FoodPrepEvent, OrderEvent, PickupEvent};
use crate::core::execution::config::StrategyKind;
use log::info;
use std::fmt::Display;
use std::time::Instant;

/// Append-only record of every event the dispatcher has seen
#[derive(Debug, Default, Clone)]
pub struct EventHistory {
    pub orders: Vec<OrderEvent>,
    pub food_preps: Vec<FoodPrepEvent>,
    pub courier_arrivals: Vec<CourierArrivalEvent>,
    pub pickups: Vec<PickupEvent>,
}

impl EventHistory {
    pub fn len(&self) -> usize {
        self.orders.len() + self.food_preps.len() + self.courier_arrivals.len() + self.pickups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Front door for food and courier signals
///
/// Records everything into an [`EventHistory`] and delegates the pairing
/// decision to the strategy it was built with.
#[derive(Debug)]
pub struct Dispatcher {
    strategy: Box<dyn PairingStrategy>,
    history: EventHistory,
    report_events: bool,
    show_timestamps: bool,
    started: Instant,
}

impl Dispatcher {
    /// Create a dispatcher around an arbitrary strategy
    pub fn new(strategy: Box<dyn PairingStrategy>) -> Self {
        Self {
            strategy,
            history: EventHistory::default(),
            report_events: true,
            show_timestamps: false,
            started: Instant::now(),
        }
    }

    /// Create a dispatcher for one of the built-in strategies
    pub fn for_strategy(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Matched => Self::new(Box::new(MatchedStrategy::new())),
            StrategyKind::Fifo => Self::new(Box::new(FifoStrategy::new())),
        }
    }

    /// Enable or disable the per-event `info!` lines
    pub fn with_event_reporting(mut self, enabled: bool) -> Self {
        self.report_events = enabled;
        self
    }

    /// Prefix event lines with wall-clock seconds since the clock origin
    ///
    /// The origin defaults to creation time; the driver resets it when its run starts.
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.show_timestamps = enabled;
        self
    }

    /// Count timestamp prefixes from `origin`
    pub fn set_clock_origin(&mut self, origin: Instant) {
        self.started = origin;
    }

    pub fn clock_origin(&self) -> Instant {
        self.started
    }

    pub fn do_order(&mut self, event: OrderEvent) -> OrderEvent {
        self.report(&event);
        self.history.orders.push(event.clone());
        event
    }

    pub fn do_food_prep(&mut self, event: FoodPrepEvent) -> Option<Pairing> {
        self.report(&event);
        self.history.food_preps.push(event.clone());
        self.strategy.pair_food_prep(event)
    }

    pub fn do_courier_arrival(&mut self, event: CourierArrivalEvent) -> Option<Pairing> {
        self.report(&event);
        self.history.courier_arrivals.push(event.clone());
        self.strategy.pair_courier_arrival(event)
    }

    pub fn do_pickup(&mut self, event: PickupEvent) {
        self.report(&event);
        self.history.pickups.push(event);
    }

    /// Mean seconds food waited for a courier, `None` before the first pickup
    pub fn mean_food_wait_time(&self) -> Option<f64> {
        mean(self.history.pickups.iter().map(PickupEvent::food_wait_time))
    }

    /// Mean seconds couriers waited for food, `None` before the first pickup
    pub fn mean_courier_wait_time(&self) -> Option<f64> {
        mean(self.history.pickups.iter().map(PickupEvent::courier_wait_time))
    }

    pub fn history(&self) -> &EventHistory {
        &self.history
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn pending_food_preps(&self) -> usize {
        self.strategy.pending_food_preps()
    }

    pub fn pending_courier_arrivals(&self) -> usize {
        self.strategy.pending_courier_arrivals()
    }

    fn report(&self, event: &impl Display) {
        if !self.report_events {
            return;
        }
        if self.show_timestamps {
            info!("[{:>9.3}s] {}", self.started.elapsed().as_secs_f64(), event);
        } else {
            info!("{}", event);
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Order;
    use std::sync::Arc;

    fn fixture_orders() -> Vec<Arc<Order>> {
        vec![
            Arc::new(Order::with_id("a8cfcb76-7f24-4420-a5ba-d46dd77bdffd", "Banana Split", 4.0)),
            Arc::new(Order::with_id("58e9b5fe-3fde-4a27-8e98-682e58a4a65d", "McFlury", 23.0)),
            Arc::new(Order::with_id("2ec069e3-576f-48eb-869f-74a540ef840c", "Acai Bowl", 2.0)),
        ]
    }

    /// Food preps and courier arrivals of the reference fixture, merged by time
    fn feed(dispatcher: &mut Dispatcher) -> Vec<Option<Pairing>> {
        let o = fixture_orders();
        let food = |t: f64, i: usize| FoodPrepEvent::new(t, Arc::clone(&o[i]));
        let courier = |t: f64, i: usize| CourierArrivalEvent::new(t, Arc::clone(&o[i]));

        vec![
            dispatcher.do_food_prep(food(20.5, 2)),
            dispatcher.do_food_prep(food(21.5, 0)),
            dispatcher.do_courier_arrival(courier(26.5, 0)),
            dispatcher.do_courier_arrival(courier(27.0, 1)),
            dispatcher.do_courier_arrival(courier(27.5, 2)),
            dispatcher.do_food_prep(food(41.0, 1)),
        ]
    }

    fn ids(pairing: &Option<Pairing>) -> Option<(String, String)> {
        pairing.as_ref().map(|p| {
            (
                p.food_prep.order.name.clone(),
                p.courier_arrival.order.name.clone(),
            )
        })
    }

    #[test]
    fn test_do_order_is_passthrough() {
        let mut dispatcher = Dispatcher::for_strategy(StrategyKind::Matched);
        let event = OrderEvent::new(17.5, Arc::clone(&fixture_orders()[0]));

        let returned = dispatcher.do_order(event.clone());

        assert_eq!(returned, event);
        assert_eq!(dispatcher.history().orders, vec![event]);
    }

    #[test]
    fn test_do_pickup_records() {
        let mut dispatcher = Dispatcher::for_strategy(StrategyKind::Fifo);
        let order = Arc::clone(&fixture_orders()[0]);
        let pickup = PickupEvent::resolve(
            FoodPrepEvent::new(21.5, Arc::clone(&order)),
            CourierArrivalEvent::new(26.5, order),
        );

        dispatcher.do_pickup(pickup.clone());

        assert_eq!(dispatcher.history().pickups, vec![pickup]);
        assert_eq!(dispatcher.history().len(), 1);
    }

    #[test]
    fn test_matched_pairs_fixture_by_identity() {
        let mut dispatcher = Dispatcher::for_strategy(StrategyKind::Matched);
        let pairings = feed(&mut dispatcher);
        let names = |f: &str, c: &str| Some((f.to_string(), c.to_string()));

        let got: Vec<_> = pairings.iter().map(ids).collect();
        assert_eq!(
            got,
            vec![
                None,
                None,
                names("Banana Split", "Banana Split"),
                None,
                names("Acai Bowl", "Acai Bowl"),
                names("McFlury", "McFlury"),
            ]
        );
        assert_eq!(dispatcher.history().food_preps.len(), 3);
        assert_eq!(dispatcher.history().courier_arrivals.len(), 3);
        assert_eq!(dispatcher.pending_food_preps(), 0);
        assert_eq!(dispatcher.pending_courier_arrivals(), 0);
    }

    #[test]
    fn test_fifo_pairs_fixture_by_arrival() {
        let mut dispatcher = Dispatcher::for_strategy(StrategyKind::Fifo);
        let pairings = feed(&mut dispatcher);
        let names = |f: &str, c: &str| Some((f.to_string(), c.to_string()));

        let got: Vec<_> = pairings.iter().map(ids).collect();
        assert_eq!(
            got,
            vec![
                None,
                None,
                names("Acai Bowl", "Banana Split"),
                names("Banana Split", "McFlury"),
                None,
                names("McFlury", "Acai Bowl"),
            ]
        );
        assert_eq!(dispatcher.strategy_name(), "fifo");
    }

    #[test]
    fn test_means_without_pickups_are_no_data() {
        let dispatcher = Dispatcher::for_strategy(StrategyKind::Matched);
        assert_eq!(dispatcher.mean_food_wait_time(), None);
        assert_eq!(dispatcher.mean_courier_wait_time(), None);
    }

    #[test]
    fn test_means_over_pickups() {
        let mut dispatcher = Dispatcher::for_strategy(StrategyKind::Fifo).with_event_reporting(false);
        for pairing in feed(&mut dispatcher).into_iter().flatten() {
            dispatcher.do_pickup(pairing.into_pickup());
        }

        let food = dispatcher.mean_food_wait_time().unwrap();
        let courier = dispatcher.mean_courier_wait_time().unwrap();
        assert!((food - 11.5 / 3.0).abs() < 1e-9);
        assert!((courier - 4.5).abs() < 1e-9);
    }
}
