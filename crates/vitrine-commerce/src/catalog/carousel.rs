//! Hero-carousel rotation state.

use std::time::{Duration, Instant};

/// Rotation state for the hero carousel.
///
/// The carousel never owns a timer. Callers pass the current instant to
/// `tick` on every redraw and the carousel catches up on however many
/// whole periods elapsed since the last change, so an idle session in a
/// prompt does not stall the rotation.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    len: usize,
    period: Duration,
    last_change: Instant,
}

impl Carousel {
    /// Create a carousel over `len` slides rotating every `period`.
    pub fn new(len: usize, period: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            len,
            period,
            last_change: now,
        }
    }

    /// Currently shown slide position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides in rotation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no slides in rotation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Manually advance to the next slide, wrapping at the end.
    pub fn advance(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.last_change = now;
    }

    /// Manually step back to the previous slide, wrapping at the start.
    pub fn rewind(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.last_change = now;
    }

    /// Jump straight to a slide position. Out-of-range positions are ignored.
    pub fn jump(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.index = index;
            self.last_change = now;
        }
    }

    /// Adopt a new slide count. On any change the rotation restarts from
    /// the first slide, so the index can never point past the end.
    pub fn sync_len(&mut self, len: usize, now: Instant) {
        if len != self.len {
            self.len = len;
            self.index = 0;
            self.last_change = now;
        }
    }

    /// Apply the auto-advance due at `now`.
    ///
    /// Steps forward once per whole period elapsed since the last change
    /// and returns whether the index moved. Leftover time carries into
    /// the next period.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len == 0 || self.period.is_zero() {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.last_change);
        if elapsed < self.period {
            return false;
        }
        let period_nanos = self.period.as_nanos();
        let steps = elapsed.as_nanos() / period_nanos;
        let remainder = elapsed.as_nanos() % period_nanos;
        self.index = (self.index + (steps % self.len as u128) as usize) % self.len;
        self.last_change = now - Duration::from_nanos(remainder as u64);
        true
    }
}
