/// A one-shot deadline owned by whatever scheduled it.
///
/// The payload is handed back when the deadline fires (or when it is cancelled), so state that
/// was captured at scheduling time travels with the timer instead of living in a loose
/// variable next to it. Scheduling again replaces the previous deadline.
#[derive(Clone, Debug, PartialEq)]
pub struct Timer<T> {
    pending: Option<(u64, T)>,
}

impl<T> Timer<T> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Arms the timer to fire at `now_ms + delay_ms`, dropping any pending deadline.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, payload: T) {
        self.pending = Some((now_ms.saturating_add(delay_ms), payload));
    }

    /// Disarms the timer, returning the payload it was holding.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    /// Fires the timer if its deadline is at or before `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((at, _)) if at <= now_ms => self.cancel(),
            _ => None,
        }
    }
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A repeating deadline.
///
/// Missed periods are coalesced: after a long gap between `take_due` calls the interval fires
/// once and re-arms relative to `now_ms`. It disarms itself when the next deadline would
/// overflow the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interval {
    period_ms: u64,
    next_ms: Option<u64>,
}

impl Interval {
    pub const fn new() -> Self {
        Self {
            period_ms: 0,
            next_ms: None,
        }
    }

    /// Arms the interval. A zero period, or a first deadline past the end of the clock, leaves
    /// it disarmed.
    pub fn start(&mut self, now_ms: u64, period_ms: u64) {
        self.period_ms = period_ms;
        self.next_ms = if period_ms > 0 {
            now_ms.checked_add(period_ms)
        } else {
            None
        };
    }

    pub fn stop(&mut self) {
        self.next_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_ms.is_some()
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn deadline(&self) -> Option<u64> {
        self.next_ms
    }

    pub fn take_due(&mut self, now_ms: u64) -> bool {
        let Some(at) = self.next_ms else {
            return false;
        };
        if at > now_ms {
            return false;
        }
        // Disarms once the next period would not fit on the clock.
        self.next_ms = match at.checked_add(self.period_ms) {
            Some(next) if next > now_ms => Some(next),
            _ => now_ms.checked_add(self.period_ms),
        };
        true
    }
}
