use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::events::ChatMessage;

/// Receives every message published to the bus. Closures qualify.
///
/// Callbacks run on the bus's single dispatch sequence: a listener must not
/// publish from inside `on_message` — reactions go through `publish_after`,
/// which is also how every simulated reply acquires its latency.
pub trait ChatListener: Send {
    fn on_message(&self, message: &ChatMessage);
}

impl<F> ChatListener for F
where
    F: Fn(&ChatMessage) + Send,
{
    fn on_message(&self, message: &ChatMessage) {
        self(message)
    }
}

#[derive(Default)]
struct BusState {
    listeners: Vec<Box<dyn ChatListener>>,
    history: Vec<ChatMessage>,
}

/// In-process publish/subscribe hub — the system's only concurrency
/// primitive.
///
/// `publish` appends to history and fans out synchronously, in subscription
/// order, under one dispatch lock: delivery order is exactly `publish`
/// invocation order. `publish_after` is a late call to `publish` — deferred
/// messages order by firing time, not by scheduling time, and once scheduled
/// they always fire (no cancellation).
#[derive(Default)]
pub struct EventBus {
    state: Mutex<BusState>,
}

impl EventBus {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn subscribe(&self, listener: impl ChatListener + 'static) {
        let mut state = self.state.lock().expect("bus state poisoned");
        state.listeners.push(Box::new(listener));
    }

    /// Immediate, synchronous fan-out to all current subscribers.
    pub fn publish(&self, message: ChatMessage) {
        let mut state = self.state.lock().expect("bus state poisoned");
        state.history.push(message.clone());
        tracing::debug!(
            sender = %message.sender_name,
            role = ?message.role,
            "publishing chat message"
        );
        for listener in &state.listeners {
            listener.on_message(&message);
        }
    }

    /// Schedules `factory()` to be built and published once `delay` elapses,
    /// without blocking the caller. The factory runs at fire time, so status
    /// snapshots reflect publication time, not scheduling time.
    pub fn publish_after<F>(self: &Arc<Self>, delay: Duration, factory: F)
    where
        F: FnOnce() -> ChatMessage + Send + 'static,
    {
        let bus = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            bus.publish(factory());
        });
    }

    /// Snapshot of everything published so far, in delivery order.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.state.lock().expect("bus state poisoned").history.clone()
    }
}
