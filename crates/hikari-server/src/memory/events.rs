//! Typed observers keyed by event type.

use core::any::{Any, TypeId};
use std::sync::Arc;

use hashbrown::HashMap;

use crate::event::Event;

/// Unique identifier for a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

impl ObserverId {
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Type-erased observer function. Receives the concrete event as `dyn Any`.
type ObserverFn = Arc<dyn Fn(&mut dyn Any) + Send + Sync>;

struct ObserverInfo {
    id: ObserverId,
    callback: ObserverFn,
}

#[derive(Default)]
pub(super) struct EventRegistry {
    observers: HashMap<TypeId, Vec<ObserverInfo>>,
    next_observer_id: u32,
}

impl EventRegistry {
    pub(super) fn add<E, F>(&mut self, callback: F) -> ObserverId
    where
        E: Event,
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id = self.next_observer_id.wrapping_add(1);

        let callback: ObserverFn = Arc::new(move |event: &mut dyn Any| {
            if let Some(event) = event.downcast_mut::<E>() {
                callback(event);
            }
        });

        self.observers
            .entry(TypeId::of::<E>())
            .or_default()
            .push(ObserverInfo { id, callback });

        id
    }

    pub(super) fn remove(&mut self, id: ObserverId) -> bool {
        for observers in self.observers.values_mut() {
            if let Some(idx) = observers.iter().position(|o| o.id == id) {
                observers.remove(idx);
                return true;
            }
        }
        false
    }

    /// Observers for a type, in registration order.
    ///
    /// Cloned out so callbacks can run without holding the registry lock.
    pub(super) fn observers_of(&self, type_id: TypeId) -> Vec<ObserverFn> {
        self.observers
            .get(&type_id)
            .map(|observers| observers.iter().map(|o| Arc::clone(&o.callback)).collect())
            .unwrap_or_default()
    }
}

/// Run `observers` against `event`.
pub(super) fn dispatch(observers: &[ObserverFn], event: &mut dyn Event) {
    let event: &mut dyn Any = event;
    for observer in observers {
        observer(event);
    }
}

/// The concrete type of a dynamically typed event.
pub(super) fn type_of(event: &dyn Event) -> TypeId {
    let event: &dyn Any = event;
    Any::type_id(event)
}
