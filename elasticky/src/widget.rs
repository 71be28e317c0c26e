use crate::{
    ClassNames, Container, ElastickyOptions, ElastickyState, Error, EventKind, EventTarget, Host,
    Interval, Recede, ResizeMode, ScrollElm, Throttle, Timer,
};

/// How long the scroll offset must stay within the up/down limits before it becomes the new
/// baseline for direction detection.
pub const STABILITY_WINDOW_MS: u64 = 1000;

/// What caused a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Trigger {
    Start,
    Scroll,
    Resize,
    Poll,
}

/// A sticky/receding header widget.
///
/// This type is UI-agnostic:
/// - It does not hold the document. Every entry point takes a [`Host`].
/// - Your adapter forwards `scroll`/`resize` events it has been asked to listen for
///   (`on_scroll`/`on_resize`) and calls `advance(now_ms)` when `next_deadline()` passes.
///
/// State machine: `unfixed` ↔ `fixed` on the scroll threshold, and while fixed,
/// `shown` ↔ `hidden` once the page moves more than `up_limit`/`down_limit` pixels away from
/// the last stable offset. Directly after fixing neither `shown` nor `hidden` is applied.
#[derive(Clone, Debug)]
pub struct Elasticky<E> {
    options: ElastickyOptions<E>,
    classes: ClassNames,
    paused: bool,
    state: ElastickyState,
    runtime: Option<Runtime<E>>,
}

#[derive(Clone, Debug)]
struct Runtime<E> {
    container: E,
    scroll_source: EventTarget<E>,
    resize: ResizeMode,
    throttle: Option<Throttle<Trigger>>,
    poll: Interval,
    stability: Timer<f64>,
    last_offset: f64,
    is_fixed: bool,
    is_shown: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Due {
    Flush,
    Stability,
    Poll,
}

impl<E: Clone + PartialEq + core::fmt::Debug> Elasticky<E> {
    /// Creates an inactive widget. Nothing touches the document until [`Elasticky::start`].
    pub fn new(options: ElastickyOptions<E>) -> Result<Self, Error> {
        let classes = ClassNames::new(&options.name)?;
        edebug!(
            name = %options.name,
            delay_ms = options.delay_ms,
            up_limit = options.up_limit,
            down_limit = options.down_limit,
            "Elasticky::new"
        );
        Ok(Self {
            options,
            classes,
            paused: false,
            state: ElastickyState::default(),
            runtime: None,
        })
    }

    pub fn options(&self) -> &ElastickyOptions<E> {
        &self.options
    }

    pub fn class_names(&self) -> &ClassNames {
        &self.classes
    }

    pub fn state(&self) -> ElastickyState {
        self.state
    }

    pub fn dist_y(&self) -> f64 {
        self.state.dist_y
    }

    pub fn is_fixed(&self) -> bool {
        self.state.is_fixed
    }

    pub fn is_shown(&self) -> bool {
        self.state.is_shown
    }

    pub fn is_active(&self) -> bool {
        self.runtime.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The baseline offset for direction detection, while active.
    pub fn last_offset(&self) -> Option<f64> {
        self.runtime.as_ref().map(|rt| rt.last_offset)
    }

    /// The resolved container, while active.
    pub fn container(&self) -> Option<&E> {
        self.runtime.as_ref().map(|rt| &rt.container)
    }

    /// The resolved scroll source, while active.
    pub fn scroll_source(&self) -> Option<&EventTarget<E>> {
        self.runtime.as_ref().map(|rt| &rt.scroll_source)
    }

    /// Evaluates the fix threshold now.
    ///
    /// Returns `None` for the padding-based default while inactive (no container yet) or when the
    /// padding is not numeric.
    pub fn fix_at<H: Host<Element = E>>(&self, host: &H) -> Option<f64> {
        self.options.fix_at.evaluate(host, self.container())
    }

    /// Evaluates the release threshold now. See [`Elasticky::fix_at`].
    pub fn release_at<H: Host<Element = E>>(&self, host: &H) -> Option<f64> {
        self.options
            .effective_release_at()
            .evaluate(host, self.container())
    }

    pub fn set_up_limit(&mut self, up_limit: f64) {
        self.options.up_limit = up_limit;
    }

    pub fn set_down_limit(&mut self, down_limit: f64) {
        self.options.down_limit = down_limit;
    }

    pub fn set_recede(&mut self, recede: impl Into<Recede>) {
        self.options.recede = recede.into();
    }

    /// Resolves the container and scroll source, attaches listeners and evaluates the current
    /// scroll position once. Does nothing if already active.
    pub fn start<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64) {
        if self.runtime.is_some() {
            return;
        }

        let container = match &self.options.container {
            Container::Root => host.document_element(),
            Container::Element(e) => e.clone(),
            Container::Selector(s) => match resolve_selector(&*host, s) {
                Some(e) => e,
                None => {
                    ewarn!(selector = %s, "container selector matched nothing, using the root");
                    host.document_element()
                }
            },
        };
        let scroll_source = match &self.options.scroll_elm {
            ScrollElm::Window => EventTarget::Window,
            ScrollElm::Element(e) => EventTarget::Element(e.clone()),
            ScrollElm::Selector(s) => match resolve_selector(&*host, s) {
                Some(e) => EventTarget::Element(e),
                None => {
                    ewarn!(selector = %s, "scroll selector matched nothing, using the window");
                    EventTarget::Window
                }
            },
        };

        let resize = self.options.resize.normalized();
        let throttle =
            (self.options.delay_ms > 0).then(|| Throttle::new(self.options.delay_ms, true));

        host.add_listener(&scroll_source, EventKind::Scroll);
        let mut poll = Interval::new();
        match resize {
            ResizeMode::Off => {}
            ResizeMode::Listen => host.add_listener(&EventTarget::Window, EventKind::Resize),
            ResizeMode::Poll(period_ms) => poll.start(now_ms, period_ms),
        }

        edebug!(
            container = ?container,
            scroll_source = ?scroll_source,
            resize = ?resize,
            "Elasticky::start"
        );

        self.state = ElastickyState::default();
        self.runtime = Some(Runtime {
            container,
            scroll_source,
            resize,
            throttle,
            poll,
            stability: Timer::new(),
            last_offset: 0.0,
            is_fixed: false,
            is_shown: false,
        });

        self.tick(host, now_ms, Trigger::Start);

        if !self.state.is_fixed {
            if let Some(rt) = &self.runtime {
                host.add_class(&rt.container, &self.classes.unfixed);
            }
        }
    }

    /// Detaches listeners, cancels every pending timer (including a trailing throttled tick)
    /// and removes the `fixed`, `shown` and `hidden` classes. `unfixed` is left in place.
    /// Does nothing if not active.
    pub fn stop<H: Host<Element = E>>(&mut self, host: &mut H) {
        let Some(mut rt) = self.runtime.take() else {
            return;
        };

        host.remove_listener(&rt.scroll_source, EventKind::Scroll);
        if rt.resize == ResizeMode::Listen {
            host.remove_listener(&EventTarget::Window, EventKind::Resize);
        }
        rt.poll.stop();
        if let Some(throttle) = rt.throttle.as_mut() {
            throttle.flush(true);
        }
        rt.stability.cancel();

        host.remove_class(&rt.container, &self.classes.fixed);
        host.remove_class(&rt.container, &self.classes.shown);
        host.remove_class(&rt.container, &self.classes.hidden);
        edebug!("Elasticky::stop");
    }

    /// Makes ticks no-ops. Listeners stay attached and the throttle keeps counting calls, so a
    /// trailing tick that comes due while paused is consumed without effect.
    pub fn pause(&mut self) {
        edebug!("Elasticky::pause");
        self.paused = true;
    }

    pub fn resume(&mut self) {
        edebug!("Elasticky::resume");
        self.paused = false;
    }

    /// Call this when the scroll source reports a `scroll` event.
    pub fn on_scroll<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64) {
        self.dispatch(host, now_ms, Trigger::Scroll);
    }

    /// Call this when the window reports a `resize` event. Ignored unless the widget listens
    /// for resizes ([`ResizeMode::Listen`]).
    pub fn on_resize<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64) {
        let listening = self
            .runtime
            .as_ref()
            .is_some_and(|rt| rt.resize == ResizeMode::Listen);
        if listening {
            self.dispatch(host, now_ms, Trigger::Resize);
        }
    }

    /// The earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.next_due().map(|(at, _)| at)
    }

    /// Fires every timer due at or before `now_ms`, in deadline order. Each timer runs at its own
    /// deadline, so anything it schedules is relative to that instant.
    pub fn advance<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64) {
        while let Some((at, due)) = self.next_due() {
            if at > now_ms {
                break;
            }
            let Some(rt) = self.runtime.as_mut() else {
                break;
            };
            match due {
                Due::Flush => {
                    let trailing = rt.throttle.as_mut().and_then(|t| t.advance(at));
                    if let Some(trigger) = trailing {
                        self.tick(host, at, trigger);
                    }
                }
                Due::Stability => {
                    if let Some(offset) = rt.stability.take_due(at) {
                        etrace!(offset, at, "stability window elapsed");
                        rt.last_offset = offset;
                    }
                }
                Due::Poll => {
                    if rt.poll.take_due(at) {
                        self.dispatch(host, at, Trigger::Poll);
                    }
                }
            }
        }
    }

    fn next_due(&self) -> Option<(u64, Due)> {
        let rt = self.runtime.as_ref()?;
        let flush = rt
            .throttle
            .as_ref()
            .and_then(Throttle::deadline)
            .map(|at| (at, Due::Flush));
        let stability = rt.stability.deadline().map(|at| (at, Due::Stability));
        let poll = rt.poll.deadline().map(|at| (at, Due::Poll));
        [flush, stability, poll]
            .into_iter()
            .flatten()
            .min_by_key(|(at, _)| *at)
    }

    fn dispatch<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64, trigger: Trigger) {
        let Some(rt) = self.runtime.as_mut() else {
            return;
        };
        match rt.throttle.as_mut() {
            Some(throttle) => {
                if let Some(trigger) = throttle.call(trigger, now_ms) {
                    self.tick(host, now_ms, trigger);
                }
            }
            None => self.tick(host, now_ms, trigger),
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn tick<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64, trigger: Trigger) {
        if self.paused {
            etrace!(?trigger, now_ms, "tick skipped while paused");
            return;
        }
        let Some(rt) = self.runtime.as_mut() else {
            return;
        };
        let classes = &self.classes;
        let options = &self.options;

        let y = match &rt.scroll_source {
            EventTarget::Window => host.page_y_offset(),
            EventTarget::Element(e) => host.scroll_top(e),
        };
        self.state.dist_y = y;
        rt.stability.cancel();

        let threshold = if rt.is_fixed {
            options.effective_release_at()
        } else {
            &options.fix_at
        };
        let want_fixed = threshold
            .evaluate(&*host, Some(&rt.container))
            .is_some_and(|t| y > t);

        if want_fixed != rt.is_fixed {
            rt.is_fixed = want_fixed;
            rt.last_offset = y;
            if want_fixed {
                host.add_class(&rt.container, &classes.fixed);
                host.remove_class(&rt.container, &classes.unfixed);
            } else {
                host.remove_class(&rt.container, &classes.fixed);
                host.add_class(&rt.container, &classes.unfixed);
                host.remove_class(&rt.container, &classes.shown);
                host.remove_class(&rt.container, &classes.hidden);
                rt.is_shown = false;
            }
            edebug!(y, fixed = want_fixed, ?trigger, "fixed state changed");
        }

        if rt.is_fixed && options.recede.evaluate() {
            let delta = y - rt.last_offset;
            let exceeded = if delta > options.down_limit {
                if rt.is_shown {
                    host.remove_class(&rt.container, &classes.shown);
                    host.add_class(&rt.container, &classes.hidden);
                    rt.is_shown = false;
                    edebug!(y, delta, "receded");
                }
                true
            } else if delta < -options.up_limit {
                if !rt.is_shown {
                    host.remove_class(&rt.container, &classes.hidden);
                    host.add_class(&rt.container, &classes.shown);
                    rt.is_shown = true;
                    edebug!(y, delta, "revealed");
                }
                true
            } else {
                false
            };

            if exceeded {
                rt.last_offset = y;
            } else {
                rt.stability.schedule(now_ms, STABILITY_WINDOW_MS, y);
            }
        }

        self.state.is_fixed = rt.is_fixed;
        self.state.is_shown = rt.is_shown;
        etrace!(?trigger, now_ms, y, fixed = rt.is_fixed, shown = rt.is_shown, "tick");
    }
}

fn resolve_selector<H: Host>(host: &H, selector: &str) -> Option<H::Element> {
    if selector.is_empty() {
        return None;
    }
    host.query_selector(selector)
}
