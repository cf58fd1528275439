use crate::core::event::{CourierArrivalEvent, FoodPrepEvent, PickupEvent};
use crate::core::types::SimTime;

/// A food prep and a courier arrival that belong together
#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    pub food_prep: FoodPrepEvent,
    pub courier_arrival: CourierArrivalEvent,
}

impl Pairing {
    pub fn new(food_prep: FoodPrepEvent, courier_arrival: CourierArrivalEvent) -> Self {
        Self {
            food_prep,
            courier_arrival,
        }
    }

    /// When the pickup happens: as soon as both sides are present
    pub fn pickup_time(&self) -> SimTime {
        self.food_prep.time.max(self.courier_arrival.time)
    }

    pub fn into_pickup(self) -> PickupEvent {
        PickupEvent::resolve(self.food_prep, self.courier_arrival)
    }
}

/// Decides which "food ready" and "courier arrived" signals pair into a pickup
///
/// Each call either returns the completed pairing or buffers the signal until
/// its counterpart shows up. A strategy only owns its pending buffers; the
/// audit history lives in the [`Dispatcher`](super::Dispatcher).
pub trait PairingStrategy: Send + std::fmt::Debug {
    /// Short name used in logs and summaries
    fn name(&self) -> &'static str;

    /// Offer a finished food prep
    fn pair_food_prep(&mut self, event: FoodPrepEvent) -> Option<Pairing>;

    /// Offer an arrived courier
    fn pair_courier_arrival(&mut self, event: CourierArrivalEvent) -> Option<Pairing>;

    /// Food preps still waiting for a courier
    fn pending_food_preps(&self) -> usize;

    /// Couriers still waiting for food
    fn pending_courier_arrivals(&self) -> usize;
}
