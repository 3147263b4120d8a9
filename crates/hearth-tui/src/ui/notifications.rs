// Status bar toasts: one visible at a time, higher levels jump the queue

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::style::Color;

use super::theme;

/// Same-text pushes inside this window are dropped
const DEDUPE_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            NotificationLevel::Info => theme::ACCENT_LINK,
            NotificationLevel::Success => theme::ACCENT_SUCCESS,
            NotificationLevel::Error => theme::ACCENT_ERROR,
        }
    }

    fn default_duration(&self) -> Duration {
        match self {
            NotificationLevel::Info | NotificationLevel::Success => Duration::from_secs(3),
            NotificationLevel::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    shown_at: Option<Instant>,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            duration: level.default_duration(),
            shown_at: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn is_expired(&self) -> bool {
        self.shown_at
            .is_some_and(|shown| shown.elapsed() >= self.duration)
    }

    fn show(mut self) -> Self {
        self.shown_at.get_or_insert_with(Instant::now);
        self
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
    current: Option<Notification>,
    recent: Vec<(String, Instant)>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A higher level replaces the visible toast; otherwise it waits its turn
    pub fn push(&mut self, notification: Notification) {
        let now = Instant::now();
        self.recent.retain(|(_, until)| *until > now);
        if self.recent.iter().any(|(msg, _)| *msg == notification.message) {
            return;
        }
        self.recent
            .push((notification.message.clone(), now + DEDUPE_WINDOW));

        match &self.current {
            None => self.current = Some(notification.show()),
            Some(current) if notification.level > current.level => {
                self.current = Some(notification.show());
            }
            Some(_) => {
                let pos = self
                    .pending
                    .iter()
                    .position(|n| n.level < notification.level)
                    .unwrap_or(self.pending.len());
                self.pending.insert(pos, notification);
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = self.pending.pop_front().map(Notification::show);
    }

    /// Called on every UI tick
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        assert_eq!(Notification::info("a").duration, Duration::from_secs(3));
        assert_eq!(Notification::success("a").duration, Duration::from_secs(3));
        let n = Notification::error("a");
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.duration, Duration::from_secs(5));
    }

    #[test]
    fn test_first_push_is_visible() {
        let mut q = NotificationQueue::new();
        assert!(q.current().is_none());
        q.push(Notification::info("Loaded 12 hunts"));
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("Loaded 12 hunts"));
    }

    #[test]
    fn test_higher_level_replaces_current() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("copied"));
        q.push(Notification::error("fetch failed"));
        assert_eq!(q.current().map(|n| n.level), Some(NotificationLevel::Error));
        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_lower_level_waits() {
        let mut q = NotificationQueue::new();
        q.push(Notification::success("first"));
        q.push(Notification::info("second"));
        q.push(Notification::success("third"));
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("first"));
        q.dismiss();
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("third"));
        q.dismiss();
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn test_duplicates_dropped() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("same"));
        q.push(Notification::info("same"));
        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_tick_expires() {
        let mut q = NotificationQueue::new();
        let mut short = Notification::info("short");
        short.duration = Duration::ZERO;
        q.push(short);
        q.push(Notification::info("next"));
        q.tick();
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("next"));
    }
}
