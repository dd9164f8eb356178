use std::collections::HashSet;

use async_broadcast::{broadcast, InactiveReceiver, Receiver, RecvError, Sender, TrySendError};

use crate::domain::events::SessionEvent;

/// Event fan-out for session observers.
///
/// Publishing is best-effort and never blocks or fails the calling
/// operation. The channel runs in overflow mode, so a slow observer loses
/// the oldest events instead of back-pressuring publishers.
pub struct EventBroadcaster {
    sender: Sender<SessionEvent>,
    /// Keeps the channel open while no observer is attached
    _idle: InactiveReceiver<SessionEvent>,
}

impl EventBroadcaster {
    pub fn new(capacity: usize) -> Self {
        // The channel cannot be built with zero capacity; floor at one
        let (mut sender, receiver) = broadcast(capacity.max(1));
        sender.set_overflow(true);
        Self {
            sender,
            _idle: receiver.deactivate(),
        }
    }

    /// Broadcast an event to all attached observers
    pub fn publish(&self, event: SessionEvent) {
        tracing::debug!(
            "Broadcasting '{}' to {} observers",
            event.event_type,
            self.sender.receiver_count()
        );
        match self.sender.try_broadcast(event) {
            Ok(None) => {}
            Ok(Some(_)) => {
                tracing::debug!("Event channel full, oldest event dropped");
            }
            Err(TrySendError::Inactive(_)) => {
                tracing::debug!("Event broadcast but no active observers");
            }
            Err(e) => {
                tracing::warn!("Failed to broadcast event: {:?}", e);
            }
        }
    }

    /// Attach a new observer; it starts with no room subscriptions
    pub fn attach(&self) -> RoomFeed {
        RoomFeed {
            receiver: self.sender.new_receiver(),
            rooms: HashSet::new(),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// One observer's view of the event stream: a receiver plus the set of
/// rooms it currently watches. Subscription state lives only in this
/// handle and dies with it; observers resubscribe after a reconnect.
pub struct RoomFeed {
    receiver: Receiver<SessionEvent>,
    rooms: HashSet<String>,
}

impl RoomFeed {
    pub fn subscribe(&mut self, room_id: &str) {
        self.rooms.insert(room_id.to_string());
    }

    pub fn unsubscribe(&mut self, room_id: &str) {
        self.rooms.remove(room_id);
    }

    pub fn is_subscribed(&self, room_id: &str) -> bool {
        self.rooms.contains(room_id)
    }

    /// Global events are for everyone; room events only for subscribers
    fn wants(&self, event: &SessionEvent) -> bool {
        match &event.room_id {
            Some(room_id) => self.rooms.contains(room_id),
            None => true,
        }
    }

    /// Next event this observer watches, or None once the broadcaster is
    /// dropped. Skips events for other rooms and keeps going after
    /// overflow drops.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.wants(&event) => return Some(event),
                Ok(_) => continue,
                Err(RecvError::Overflowed(missed)) => {
                    tracing::debug!("Observer lagging, {} events dropped", missed);
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
