//! Session-owned event bus.
//!
//! Publishing never fails. Each event is handed to the matching inline
//! handlers, appended to a bounded log and sent on a broadcast channel for
//! hosts that poll instead of registering callbacks.

use std::collections::VecDeque;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{EditorEvent, EventCategory, NotificationLevel};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Which events a handler wants
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EventFilter {
    #[default]
    All,
    /// Events in any of these categories.
    Categories(Vec<EventCategory>),
    /// Notifications at or above this severity. Other events are skipped.
    Notifications(NotificationLevel),
}

impl EventFilter {
    pub fn matches(&self, event: &EditorEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
            EventFilter::Notifications(min) => match event {
                EditorEvent::Notification { level, .. } => severity(*level) >= severity(*min),
                _ => false,
            },
        }
    }
}

// info < success < warning < error
fn severity(level: NotificationLevel) -> u8 {
    match level {
        NotificationLevel::Info => 0,
        NotificationLevel::Success => 1,
        NotificationLevel::Warning => 2,
        NotificationLevel::Error => 3,
    }
}

/// Polling end of the bus, see [`EventBus::listen`].
pub type EventListener = broadcast::Receiver<EditorEvent>;

type Handler = Box<dyn Fn(&EditorEvent) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

/// Sizes of the event log and the broadcast channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBusConfig {
    /// Events kept in the log. Zero disables the log.
    pub log_capacity: usize,
    /// Events a lagging listener may fall behind before it loses some.
    pub channel_capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            log_capacity: 0,
            channel_capacity: 64,
        }
    }
}

/// Publish/subscribe hub between one editor session and its host
pub struct EventBus {
    subscribers: RwLock<Vec<Subscriber>>,
    log: RwLock<VecDeque<EditorEvent>>,
    sender: broadcast::Sender<EditorEvent>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            subscribers: RwLock::new(Vec::new()),
            log: RwLock::new(VecDeque::with_capacity(config.log_capacity)),
            sender,
            config,
        }
    }

    /// Deliver an event. Returns how many handlers and listeners saw it.
    ///
    /// Handlers run in subscription order on the publishing thread and must
    /// not publish on the same bus.
    pub fn publish(&self, event: EditorEvent) -> usize {
        tracing::trace!("event: {}", event.description());

        let mut delivered = 0;
        for subscriber in self.subscribers.read().iter() {
            if subscriber.filter.matches(&event) {
                (subscriber.handler)(&event);
                delivered += 1;
            }
        }

        if self.config.log_capacity > 0 {
            let mut log = self.log.write();
            if log.len() == self.config.log_capacity {
                log.pop_front();
            }
            log.push_back(event.clone());
        }

        // no listeners is fine
        delivered + self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().push(Subscriber {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        before != subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// A polling listener. It only sees events published after this call.
    pub fn listen(&self) -> EventListener {
        self.sender.subscribe()
    }

    /// Logged events, oldest first. `limit` keeps only the newest ones.
    pub fn history(&self, limit: Option<usize>) -> Vec<EditorEvent> {
        let log = self.log.read();
        let skip = limit.map_or(0, |n| log.len().saturating_sub(n));
        log.iter().skip(skip).cloned().collect()
    }

    pub fn clear_history(&self) {
        self.log.write().clear();
    }

    pub fn config(&self) -> EventBusConfig {
        self.config
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("logged", &self.log.read().len())
            .field("config", &self.config)
            .finish()
    }
}

/// Drain everything a listener has queued, skipping over lag gaps.
pub fn drain(receiver: &mut EventListener) -> Vec<EditorEvent> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                tracing::warn!("Event listener lagged, {} events dropped", missed);
            }
            Err(_) => return events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter(bus: &EventBus, filter: EventFilter) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        bus.subscribe(filter, move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_publish_without_listeners() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(EditorEvent::info("nobody hears this")), 0);
        assert!(bus.history(None).is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.publish(EditorEvent::info("gone")), 0);
    }

    #[test]
    fn test_filters() {
        let bus = EventBus::new();
        let notifications = counter(
            &bus,
            EventFilter::Categories(vec![EventCategory::Notification]),
        );
        let selections = counter(&bus, EventFilter::Categories(vec![EventCategory::Selection]));
        let problems = counter(&bus, EventFilter::Notifications(NotificationLevel::Warning));

        bus.publish(EditorEvent::success("ok"));
        bus.publish(EditorEvent::error("bad"));
        bus.publish(EditorEvent::SelectionChanged { selection: None });

        assert_eq!(notifications.load(Ordering::SeqCst), 2);
        assert_eq!(selections.load(Ordering::SeqCst), 1);
        assert_eq!(problems.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_log_is_bounded() {
        let bus = EventBus::with_config(EventBusConfig {
            log_capacity: 3,
            ..Default::default()
        });
        for i in 0..6 {
            bus.publish(EditorEvent::info(format!("event {}", i)));
        }

        let log = bus.history(None);
        assert_eq!(log.len(), 3);
        assert!(matches!(&log[0], EditorEvent::Notification { message, .. } if message == "event 3"));
        assert_eq!(bus.history(Some(1)).len(), 1);

        bus.clear_history();
        assert!(bus.history(None).is_empty());
    }

    #[test]
    fn test_listener_drains_in_order() {
        let bus = EventBus::new();
        bus.publish(EditorEvent::info("before"));
        let mut listener = bus.listen();

        bus.publish(EditorEvent::ToolChanged {
            tool: "wall".to_string(),
        });
        bus.publish(EditorEvent::info("after"));

        let events = drain(&mut listener);
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], EditorEvent::ToolChanged { tool } if tool == "wall"));
        assert!(drain(&mut listener).is_empty());
    }

    #[test]
    fn test_lagging_listener_keeps_newest() {
        let bus = EventBus::with_config(EventBusConfig {
            channel_capacity: 2,
            ..Default::default()
        });
        let mut listener = bus.listen();
        for i in 0..5 {
            bus.publish(EditorEvent::info(format!("event {}", i)));
        }
        let events = drain(&mut listener);
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[1], EditorEvent::Notification { message, .. } if message == "event 4"));
    }
}
