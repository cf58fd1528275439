use super::types::{Order, SimTime};
use std::fmt;
use std::sync::Arc;

/// Discriminant of the four event variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Order,
    FoodPrep,
    CourierArrival,
    Pickup,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Order => "OrderEvent",
            EventKind::FoodPrep => "FoodPrepEvent",
            EventKind::CourierArrival => "CourierArrivalEvent",
            EventKind::Pickup => "PickupEvent",
        };
        f.write_str(name)
    }
}

/// An order was submitted at `time`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEvent {
    pub time: SimTime,
    pub order: Arc<Order>,
}

/// The food for `order` finished preparing at `time`
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPrepEvent {
    pub time: SimTime,
    pub order: Arc<Order>,
}

/// A courier dispatched for `order` arrived at `time`
///
/// Under pooled (fifo) dispatch the courier may end up carrying a different order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourierArrivalEvent {
    pub time: SimTime,
    pub order: Arc<Order>,
}

/// A courier picked up food; resolves one food prep and one courier arrival
#[derive(Debug, Clone, PartialEq)]
pub struct PickupEvent {
    pub time: SimTime,
    pub order: Arc<Order>,
    pub food_prep: FoodPrepEvent,
    pub courier_arrival: CourierArrivalEvent,
}

impl OrderEvent {
    pub fn new(time: SimTime, order: Arc<Order>) -> Self {
        Self { time, order }
    }
}

impl FoodPrepEvent {
    pub fn new(time: SimTime, order: Arc<Order>) -> Self {
        Self { time, order }
    }
}

impl CourierArrivalEvent {
    pub fn new(time: SimTime, order: Arc<Order>) -> Self {
        Self { time, order }
    }
}

impl PickupEvent {
    /// Build the pickup that resolves a food prep and a courier arrival
    ///
    /// The pickup happens once both sides are present and carries the
    /// food prep's order.
    pub fn resolve(food_prep: FoodPrepEvent, courier_arrival: CourierArrivalEvent) -> Self {
        Self {
            time: food_prep.time.max(courier_arrival.time),
            order: Arc::clone(&food_prep.order),
            food_prep,
            courier_arrival,
        }
    }

    /// Seconds the food sat waiting for a courier
    pub fn food_wait_time(&self) -> f64 {
        self.time - self.food_prep.time
    }

    /// Seconds the courier waited for the food
    pub fn courier_wait_time(&self) -> f64 {
        self.time - self.courier_arrival.time
    }
}

/// Closed set of events flowing through the scheduler
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Order(OrderEvent),
    FoodPrep(FoodPrepEvent),
    CourierArrival(CourierArrivalEvent),
    Pickup(PickupEvent),
}

impl Event {
    pub fn time(&self) -> SimTime {
        match self {
            Event::Order(e) => e.time,
            Event::FoodPrep(e) => e.time,
            Event::CourierArrival(e) => e.time,
            Event::Pickup(e) => e.time,
        }
    }

    pub fn order(&self) -> &Arc<Order> {
        match self {
            Event::Order(e) => &e.order,
            Event::FoodPrep(e) => &e.order,
            Event::CourierArrival(e) => &e.order,
            Event::Pickup(e) => &e.order,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Order(_) => EventKind::Order,
            Event::FoodPrep(_) => EventKind::FoodPrep,
            Event::CourierArrival(_) => EventKind::CourierArrival,
            Event::Pickup(_) => EventKind::Pickup,
        }
    }
}

impl From<OrderEvent> for Event {
    fn from(event: OrderEvent) -> Self {
        Event::Order(event)
    }
}

impl From<FoodPrepEvent> for Event {
    fn from(event: FoodPrepEvent) -> Self {
        Event::FoodPrep(event)
    }
}

impl From<CourierArrivalEvent> for Event {
    fn from(event: CourierArrivalEvent) -> Self {
        Event::CourierArrival(event)
    }
}

impl From<PickupEvent> for Event {
    fn from(event: PickupEvent) -> Self {
        Event::Pickup(event)
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order submitted: time={:.4} id={} name={}",
            self.time, self.order.id, self.order.name
        )
    }
}

impl fmt::Display for FoodPrepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Food prep finished: time={:.4} id={} name={}",
            self.time, self.order.id, self.order.name
        )
    }
}

impl fmt::Display for CourierArrivalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Courier arrived: time={:.4} dispatched_for_id={} dispatched_for_name={}",
            self.time, self.order.id, self.order.name
        )
    }
}

impl fmt::Display for PickupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order picked up: time={:.4} id={} name={} food_wait={:.0}ms courier_wait={:.0}ms",
            self.time,
            self.order.id,
            self.order.name,
            self.food_wait_time() * 1000.0,
            self.courier_wait_time() * 1000.0
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Order(e) => fmt::Display::fmt(e, f),
            Event::FoodPrep(e) => fmt::Display::fmt(e, f),
            Event::CourierArrival(e) => fmt::Display::fmt(e, f),
            Event::Pickup(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(name: &str, prep_time: f64) -> Arc<Order> {
        Arc::new(Order::with_id(name.to_lowercase(), name, prep_time))
    }

    #[test]
    fn test_pickup_waits_when_courier_is_late() {
        let acai = order("Acai Bowl", 2.0);
        let banana = order("Banana Split", 4.0);
        let pickup = PickupEvent::resolve(
            FoodPrepEvent::new(20.5, Arc::clone(&acai)),
            CourierArrivalEvent::new(26.5, banana),
        );

        assert_eq!(pickup.time, 26.5);
        assert_eq!(pickup.order, acai);
        assert_eq!(pickup.food_wait_time(), 6.0);
        assert_eq!(pickup.courier_wait_time(), 0.0);
    }

    #[test]
    fn test_pickup_waits_when_food_is_late() {
        let mcflury = order("McFlury", 23.0);
        let pickup = PickupEvent::resolve(
            FoodPrepEvent::new(41.0, Arc::clone(&mcflury)),
            CourierArrivalEvent::new(27.5, mcflury),
        );

        assert_eq!(pickup.time, 41.0);
        assert_eq!(pickup.food_wait_time(), 0.0);
        assert_eq!(pickup.courier_wait_time(), 13.5);
    }

    #[test]
    fn test_event_accessors() {
        let banana = order("Banana Split", 4.0);
        let event: Event = CourierArrivalEvent::new(26.5, Arc::clone(&banana)).into();

        assert_eq!(event.kind(), EventKind::CourierArrival);
        assert_eq!(event.time(), 26.5);
        assert_eq!(event.order(), &banana);
    }

    #[test]
    fn test_pickup_display_reports_milliseconds() {
        let banana = order("Banana Split", 4.0);
        let pickup = PickupEvent::resolve(
            FoodPrepEvent::new(21.5, Arc::clone(&banana)),
            CourierArrivalEvent::new(27.0, banana),
        );

        assert_eq!(
            pickup.to_string(),
            "Order picked up: time=27.0000 id=banana split name=Banana Split food_wait=5500ms courier_wait=0ms"
        );
    }
}
