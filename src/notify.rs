use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::model::Event;

const CHANNEL_CAPACITY: usize = 256;

/// Broadcast hub for booking events, one channel per room.
pub struct NotifyHub {
    channels: DashMap<String, broadcast::Sender<Event>>,
}

impl NotifyHub {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Subscribe to events for a room. Creates the channel if needed.
    pub fn subscribe(&self, room: &str) -> broadcast::Receiver<Event> {
        let sender = self
            .channels
            .entry(room.to_owned())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        sender.subscribe()
    }

    /// Send an event to one room's subscribers. No-op if nobody is listening.
    pub fn send(&self, room: &str, event: &Event) {
        if let Some(sender) = self.channels.get(room) {
            let _ = sender.send(event.clone());
        }
    }

    /// Send a store-wide event to every room's subscribers.
    pub fn broadcast(&self, event: &Event) {
        for entry in self.channels.iter() {
            let _ = entry.value().send(event.clone());
        }
    }
}

impl Default for NotifyHub {
    fn default() -> Self {
        Self::new()
    }
}
