//! Transient notification center.
//!
//! Notices are the toast layer of the storefront: they appear on the
//! next redraw and silently expire after a fixed TTL. The center never
//! owns a timer; callers pass the current instant in, which keeps
//! expiry deterministic under test.

use std::time::{Duration, Instant};

/// Default time a notice stays live.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

/// A transient toast message.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Handle for early dismissal.
    pub id: u64,
    /// Severity, drives the presentation.
    pub kind: NoticeKind,
    /// Text shown to the user.
    pub message: String,
    created: Instant,
}

/// Holds the live notices and expires them after the TTL.
pub struct Notices {
    entries: Vec<Notice>,
    ttl: Duration,
    next_id: u64,
}

impl Notices {
    /// Create a center whose notices live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
            next_id: 0,
        }
    }

    /// Push a notice, returning its dismissal handle.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            kind,
            message: message.into(),
            created: now,
        });
        id
    }

    /// Push a success notice.
    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(NoticeKind::Success, message, now)
    }

    /// Push an error notice.
    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(NoticeKind::Error, message, now)
    }

    /// Push an info notice.
    pub fn info(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(NoticeKind::Info, message, now)
    }

    /// Push a warning notice.
    pub fn warning(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(NoticeKind::Warning, message, now)
    }

    /// Dismiss a notice early. Returns whether it was still live.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() < before
    }

    /// Drop every notice whose TTL has elapsed at `now` and return them.
    pub fn sweep(&mut self, now: Instant) -> Vec<Notice> {
        let ttl = self.ttl;
        let (expired, live) = self
            .entries
            .drain(..)
            .partition(|n| now.saturating_duration_since(n.created) >= ttl);
        self.entries = live;
        expired
    }

    /// The live notices in arrival order.
    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    /// Check if no notice is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_after_ttl() {
        let start = Instant::now();
        let mut notices = Notices::new(DEFAULT_TTL);
        notices.success("Produto criado com sucesso!", start);

        let expired = notices.sweep(start + Duration::from_secs(2));
        assert!(expired.is_empty());
        assert_eq!(notices.entries().len(), 1);

        let expired = notices.sweep(start + Duration::from_secs(3));
        assert_eq!(expired.len(), 1);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_sweep_keeps_younger_notices() {
        let start = Instant::now();
        let mut notices = Notices::new(DEFAULT_TTL);
        notices.info("primeiro", start);
        notices.info("segundo", start + Duration::from_secs(2));

        let expired = notices.sweep(start + Duration::from_secs(4));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].message, "primeiro");
        assert_eq!(notices.entries().len(), 1);
        assert_eq!(notices.entries()[0].message, "segundo");
    }

    #[test]
    fn test_early_dismissal_wins_over_expiry() {
        let start = Instant::now();
        let mut notices = Notices::new(DEFAULT_TTL);
        let id = notices.warning("fechando", start);

        assert!(notices.dismiss(id));
        assert!(!notices.dismiss(id));
        assert!(notices.sweep(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_entries_keep_arrival_order_and_kind() {
        let start = Instant::now();
        let mut notices = Notices::new(DEFAULT_TTL);
        notices.error("Preencha os campos obrigatórios.", start);
        notices.success("Slide atualizado!", start);

        let kinds: Vec<NoticeKind> = notices.entries().iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Error, NoticeKind::Success]);
    }
}
