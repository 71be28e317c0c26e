use crate::Timer;

/// A leading/trailing rate limiter driven by the caller's clock.
///
/// At most one call is let through on the leading edge of a window (unless `skip_first` is
/// set) and at most one trailing call is owed when the window closes, carrying the *latest*
/// call data. `A` is whatever the caller wants delivered: arguments, a receiver, or both
/// bundled together.
///
/// The throttle never invokes anything itself; each operation returns the call data that
/// should be delivered now, if any. See [`Throttled`] for a wrapper that owns the callback.
///
/// With `skip_first`, the suppressed leading call counts twice, so it is still delivered as the
/// trailing call when the window closes (or on a non-cancelling [`Throttle::flush`]).
#[derive(Clone, Debug)]
pub struct Throttle<A> {
    window_ms: u64,
    skip_first: bool,
    calls: u32,
    latest: Option<A>,
    auto_flush: Timer<()>,
}

impl<A> Throttle<A> {
    pub fn new(window_ms: u64, skip_first: bool) -> Self {
        Self {
            window_ms,
            skip_first,
            calls: 0,
            latest: None,
            auto_flush: Timer::new(),
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn skip_first(&self) -> bool {
        self.skip_first
    }

    /// Whether a window is currently open.
    pub fn is_open(&self) -> bool {
        self.calls > 0
    }

    /// Number of calls counted in the open window (a skipped leading call counts twice).
    pub fn calls(&self) -> u32 {
        self.calls
    }

    /// When the open window closes on its own.
    pub fn deadline(&self) -> Option<u64> {
        self.auto_flush.deadline()
    }

    /// Records a call. Returns the call data if it must be delivered immediately.
    pub fn call(&mut self, args: A, now_ms: u64) -> Option<A> {
        let leading = self.calls == 0;
        if leading {
            self.auto_flush.schedule(now_ms, self.window_ms, ());
        }
        self.calls = self.calls.saturating_add(1);

        if !leading {
            self.latest = Some(args);
            return None;
        }
        if self.skip_first {
            self.calls = self.calls.saturating_add(1);
            self.latest = Some(args);
            return None;
        }
        // A trailing call needs a later call, which overwrites `latest` anyway.
        self.latest = None;
        Some(args)
    }

    /// Closes the window. Returns the trailing call data unless `cancel` is set or nothing
    /// beyond the leading call arrived.
    pub fn flush(&mut self, cancel: bool) -> Option<A> {
        self.auto_flush.cancel();
        let owed = self.calls > 1;
        self.calls = 0;
        let latest = self.latest.take();
        if cancel || !owed {
            return None;
        }
        latest
    }

    /// Closes the window if its deadline has passed.
    pub fn advance(&mut self, now_ms: u64) -> Option<A> {
        self.auto_flush.take_due(now_ms)?;
        self.flush(false)
    }
}

/// A [`Throttle`] that owns its callback: the limited version of `callback`.
pub struct Throttled<A, F> {
    throttle: Throttle<A>,
    callback: F,
}

/// Wraps `callback` so it runs at most once per `window_ms` on the leading edge, plus one
/// trailing run with the latest arguments.
pub fn throttle<A, F: FnMut(A)>(callback: F, window_ms: u64, skip_first: bool) -> Throttled<A, F> {
    Throttled {
        throttle: Throttle::new(window_ms, skip_first),
        callback,
    }
}

impl<A, F: FnMut(A)> Throttled<A, F> {
    pub fn call(&mut self, args: A, now_ms: u64) {
        if let Some(args) = self.throttle.call(args, now_ms) {
            (self.callback)(args);
        }
    }

    /// Closes the window now, delivering the trailing call unless `cancel` is set.
    pub fn flush(&mut self, cancel: bool) {
        if let Some(args) = self.throttle.flush(cancel) {
            (self.callback)(args);
        }
    }

    /// Delivers the trailing call if the window deadline has passed.
    pub fn advance(&mut self, now_ms: u64) {
        if let Some(args) = self.throttle.advance(now_ms) {
            (self.callback)(args);
        }
    }

    pub fn throttle(&self) -> &Throttle<A> {
        &self.throttle
    }

    pub fn deadline(&self) -> Option<u64> {
        self.throttle.deadline()
    }

    pub fn into_inner(self) -> F {
        self.callback
    }
}

impl<A: core::fmt::Debug, F> core::fmt::Debug for Throttled<A, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Throttled")
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}
