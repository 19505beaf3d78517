use std::time::{Duration, Instant};

use uuid::Uuid;

/// How long a notification stays visible.
const DEFAULT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One transient user-facing message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub level: NotificationLevel,
    created: Instant,
}

/// Transient notification list with automatic expiry.
///
/// Entries older than the TTL are pruned whenever the active list is
/// read, so there is no timer to manage: expiry is an observation-time
/// property.
#[derive(Debug)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
        }
    }

    /// Adds a notification and returns its id for explicit dismissal.
    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(Notification {
            id,
            message: message.into(),
            level,
            created: Instant::now(),
        });
        id
    }

    /// The not-yet-expired notifications, oldest first.
    pub fn active(&mut self) -> &[Notification] {
        let ttl = self.ttl;
        self.entries.retain(|n| n.created.elapsed() < ttl);
        &self.entries
    }

    /// Removes a notification before its TTL elapses; returns whether
    /// it was present.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }
}
