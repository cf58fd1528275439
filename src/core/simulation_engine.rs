use super::dispatch::Dispatcher;
use super::errors::SimError;
use super::eta::EtaSource;
use super::event::{CourierArrivalEvent, Event, FoodPrepEvent, OrderEvent};
use super::event_scheduler::EventScheduler;
use super::execution::config::SimulationConfig;
use super::execution::pacing::RealTimePacer;
use super::orders::{check_prep_time, load_orders};
use super::types::{Order, SimTime};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called for every event, right before the driver processes it
    fn on_event(&mut self, event: &Event);

    /// Called once the scheduler has drained
    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

/// Outcome of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub strategy: String,
    pub orders: usize,
    pub pickups: usize,
    pub unresolved_food_preps: usize,
    pub unresolved_courier_arrivals: usize,
    /// Seconds; `None` when no pickup happened
    pub mean_food_wait: Option<f64>,
    /// Seconds; `None` when no pickup happened
    pub mean_courier_wait: Option<f64>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean food wait time: {}", Millis(self.mean_food_wait))?;
        write!(f, "mean courier wait time: {}", Millis(self.mean_courier_wait))
    }
}

struct Millis(Option<f64>);

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(seconds) => write!(f, "{:.3}ms", seconds * 1000.0),
            None => f.write_str("no data"),
        }
    }
}

/// Drives orders through food prep, courier arrival and pickup
///
/// Events are pulled from the scheduler one at a time. Order events spawn a
/// food prep and a courier arrival; those two are handed to the dispatcher,
/// and every pairing it reports is scheduled as a pickup.
pub struct Simulation {
    dispatcher: Dispatcher,
    scheduler: EventScheduler,
    eta: EtaSource,
    realtime: bool,
    pacer: Option<RealTimePacer>,
    observers: Vec<Box<dyn SimulationObserver>>,
    events_processed: u64,
}

impl Simulation {
    /// Create a real-time simulation from its parts
    pub fn new(dispatcher: Dispatcher, eta: EtaSource) -> Self {
        Self {
            dispatcher,
            scheduler: EventScheduler::new(),
            eta,
            realtime: true,
            pacer: None,
            observers: Vec::new(),
            events_processed: 0,
        }
    }

    /// Build the simulation a configuration describes
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let dispatcher = Dispatcher::for_strategy(config.strategy)
            .with_event_reporting(config.report_events)
            .with_timestamps(config.show_timestamps);
        let eta = EtaSource::from_settings(config.eta, config.seed)?;

        Ok(Self::new(dispatcher, eta).with_realtime(config.realtime))
    }

    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Skip wall-clock pacing entirely
    pub fn discrete(self) -> Self {
        self.with_realtime(false)
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    /// Submit a single order at `time`
    ///
    /// Fails without scheduling anything when the prep time is negative or not finite.
    pub fn add_order(&mut self, order: impl Into<Arc<Order>>, time: SimTime) -> Result<(), SimError> {
        let order = order.into();
        check_prep_time(0, &order)?;
        self.scheduler.push(OrderEvent::new(time, order));
        Ok(())
    }

    /// Submit orders at `t0`, `t0 + tdelta`, `t0 + 2*tdelta`, ...
    ///
    /// Every order is checked before the first one is scheduled.
    pub fn add_orders<I>(&mut self, orders: I, t0: SimTime, tdelta: f64) -> Result<usize, SimError>
    where
        I: IntoIterator<Item = Order>,
    {
        let orders: Vec<Order> = orders.into_iter().collect();
        for (index, order) in orders.iter().enumerate() {
            check_prep_time(index, order)?;
        }

        let count = orders.len();
        for (i, order) in orders.into_iter().enumerate() {
            self.scheduler
                .push(OrderEvent::new(t0 + i as f64 * tdelta, Arc::new(order)));
        }
        Ok(count)
    }

    /// Load orders from a JSON file and submit them like [`Simulation::add_orders`]
    pub fn add_orders_from_file(
        &mut self,
        path: impl AsRef<Path>,
        t0: SimTime,
        tdelta: f64,
    ) -> Result<usize, SimError> {
        let orders = load_orders(path)?;
        self.add_orders(orders, t0, tdelta)
    }

    /// Run until no events remain
    pub fn run(&mut self) -> RunSummary {
        while self.step() {}

        let summary = self.summary();
        if summary.unresolved_food_preps > 0 || summary.unresolved_courier_arrivals > 0 {
            warn!(
                "run ended with {} food preps and {} couriers still waiting",
                summary.unresolved_food_preps, summary.unresolved_courier_arrivals
            );
        }
        for observer in &mut self.observers {
            observer.on_run_complete(&summary);
        }
        summary
    }

    /// Process one event, returns true if events remain
    pub fn step(&mut self) -> bool {
        let Some(event) = self.scheduler.pop() else {
            return false;
        };

        let pacer = self.start_clock();
        if self.realtime {
            pacer.wait_until(event.time());
        }

        for observer in &mut self.observers {
            observer.on_event(&event);
        }

        self.process(event);
        self.events_processed += 1;

        !self.scheduler.is_empty()
    }

    /// Pacing and timestamp prefixes share the instant the first event is popped
    fn start_clock(&mut self) -> RealTimePacer {
        if let Some(pacer) = self.pacer {
            return pacer;
        }
        let pacer = RealTimePacer::start();
        self.dispatcher.set_clock_origin(pacer.origin());
        self.pacer = Some(pacer);
        pacer
    }

    /// Wall-clock instant of simulation time zero, once the run has started
    pub fn clock_origin(&self) -> Option<Instant> {
        self.pacer.map(|pacer| pacer.origin())
    }

    fn process(&mut self, event: Event) {
        match event {
            Event::Order(event) => {
                let event = self.dispatcher.do_order(event);
                self.schedule_followups(&event);
            }
            Event::FoodPrep(event) => {
                if let Some(pairing) = self.dispatcher.do_food_prep(event) {
                    self.scheduler.push(pairing.into_pickup());
                }
            }
            Event::CourierArrival(event) => {
                if let Some(pairing) = self.dispatcher.do_courier_arrival(event) {
                    self.scheduler.push(pairing.into_pickup());
                }
            }
            Event::Pickup(event) => self.dispatcher.do_pickup(event),
        }
    }

    fn schedule_followups(&mut self, event: &OrderEvent) {
        let eta = self.eta.next_eta();
        debug!("order {} courier eta {:.4}s", event.order.id, eta);

        self.scheduler.push(FoodPrepEvent::new(
            event.time + event.order.prep_time,
            Arc::clone(&event.order),
        ));
        self.scheduler.push(CourierArrivalEvent::new(
            event.time + eta,
            Arc::clone(&event.order),
        ));
    }

    /// Summary of what has happened so far
    pub fn summary(&self) -> RunSummary {
        let history = self.dispatcher.history();
        RunSummary {
            strategy: self.dispatcher.strategy_name().to_string(),
            orders: history.orders.len(),
            pickups: history.pickups.len(),
            unresolved_food_preps: self.dispatcher.pending_food_preps(),
            unresolved_courier_arrivals: self.dispatcher.pending_courier_arrivals(),
            mean_food_wait: self.dispatcher.mean_food_wait_time(),
            mean_courier_wait: self.dispatcher.mean_courier_wait_time(),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn scheduler(&self) -> &EventScheduler {
        &self.scheduler
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Check if there are pending events in the scheduler
    pub fn has_pending_events(&self) -> bool {
        !self.scheduler.is_empty()
    }
}
