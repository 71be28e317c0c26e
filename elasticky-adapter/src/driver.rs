use alloc::vec::Vec;
use core::fmt;

use elasticky::{Elasticky, EventKind, EventTarget, Host};

/// Index of a widget inside a [`Driver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub usize);

/// A framework-neutral event pump for a set of widgets sharing one page.
///
/// This type does not hold the host. Adapters drive it by calling:
/// - `dispatch(target, event, now_ms)` when the page reports a `scroll`/`resize` event
/// - `advance(now_ms)` from a timer, ideally scheduled for `next_deadline()`
///
/// Widgets are independent; the driver only decides which of them a host event concerns.
#[derive(Clone, Debug)]
pub struct Driver<E> {
    widgets: Vec<Elasticky<E>>,
}

impl<E: Clone + PartialEq + fmt::Debug> Driver<E> {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }

    pub fn push(&mut self, widget: Elasticky<E>) -> WidgetId {
        self.widgets.push(widget);
        WidgetId(self.widgets.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: WidgetId) -> Option<&Elasticky<E>> {
        self.widgets.get(id.0)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Elasticky<E>> {
        self.widgets.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Elasticky<E>)> {
        self.widgets
            .iter()
            .enumerate()
            .map(|(i, w)| (WidgetId(i), w))
    }

    pub fn start_all<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64) {
        for w in &mut self.widgets {
            w.start(host, now_ms);
        }
    }

    pub fn stop_all<H: Host<Element = E>>(&mut self, host: &mut H) {
        for w in &mut self.widgets {
            w.stop(host);
        }
    }

    /// Forwards a host event to every active widget listening on `target`.
    ///
    /// Scroll events go to widgets whose scroll source is `target`; resize events are only
    /// reported by the window.
    pub fn dispatch<H: Host<Element = E>>(
        &mut self,
        host: &mut H,
        target: &EventTarget<E>,
        event: EventKind,
        now_ms: u64,
    ) {
        for w in &mut self.widgets {
            match event {
                EventKind::Scroll => {
                    if w.scroll_source() == Some(target) {
                        w.on_scroll(host, now_ms);
                    }
                }
                EventKind::Resize => {
                    if target.is_window() {
                        w.on_resize(host, now_ms);
                    }
                }
            }
        }
    }

    pub fn advance<H: Host<Element = E>>(&mut self, host: &mut H, now_ms: u64) {
        for w in &mut self.widgets {
            w.advance(host, now_ms);
        }
    }

    /// The earliest timer deadline across all widgets.
    pub fn next_deadline(&self) -> Option<u64> {
        self.widgets.iter().filter_map(Elasticky::next_deadline).min()
    }
}

impl<E: Clone + PartialEq + fmt::Debug> Default for Driver<E> {
    fn default() -> Self {
        Self::new()
    }
}
