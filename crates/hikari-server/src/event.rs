//! Event bus port.

use core::any::Any;

/// An event the host can publish to listeners.
///
/// Implement [`as_cancellable`](Self::as_cancellable) and
/// [`as_cancellable_mut`](Self::as_cancellable_mut) for events listeners may cancel.
pub trait Event: Any + Send + 'static {
    /// Event type name for debugging.
    fn event_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    fn as_cancellable(&self) -> Option<&dyn Cancellable> {
        None
    }

    fn as_cancellable_mut(&mut self) -> Option<&mut dyn Cancellable> {
        None
    }
}

/// Events whose effect listeners can veto.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;
    fn set_cancelled(&mut self, cancelled: bool);
}

/// Publishes events to every registered listener, synchronously.
pub trait EventBus {
    fn call_event(&self, event: &mut dyn Event);
}
