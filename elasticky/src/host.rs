use alloc::string::String;

/// Something a listener can be attached to.
///
/// Scroll sources are either the window (read through its page offset) or an element (read
/// through its scroll-top). Resize listeners always go on the window.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventTarget<E> {
    Window,
    Element(E),
}

impl<E> EventTarget<E> {
    pub fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventKind {
    Scroll,
    Resize,
}

/// The document environment a widget runs in.
///
/// Implementations are expected to be cheap handles around the real UI layer (a DOM binding,
/// a test double, ...). The widget never stores a host; it is passed to every entry point, so
/// several widgets can share one.
///
/// Contract: selectors that match nothing return `None`; the widget falls back to the
/// document root (containers) or the window (scroll sources).
pub trait Host {
    type Element: Clone + PartialEq + core::fmt::Debug;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// The root element (`<html>`), used as the default container.
    fn document_element(&self) -> Self::Element;

    /// Vertical page offset of the window.
    fn page_y_offset(&self) -> f64;

    fn scroll_top(&self, element: &Self::Element) -> f64;

    /// The computed `padding-top` value of `element`, as the style engine reports it
    /// (e.g. `"64px"`).
    fn computed_padding_top(&self, element: &Self::Element) -> String;

    fn add_class(&mut self, element: &Self::Element, class: &str);

    fn remove_class(&mut self, element: &Self::Element, class: &str);

    fn add_listener(&mut self, target: &EventTarget<Self::Element>, event: EventKind);

    fn remove_listener(&mut self, target: &EventTarget<Self::Element>, event: EventKind);
}
