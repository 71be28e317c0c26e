use alloc::string::String;

use crate::{Recede, Threshold};

/// Where the state classes are applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Container<E> {
    /// The document root element.
    #[default]
    Root,
    /// Resolved with [`crate::Host::query_selector`] at start; falls back to the root.
    Selector(String),
    Element(E),
}

/// Where scroll events come from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScrollElm<E> {
    #[default]
    Window,
    /// Resolved with [`crate::Host::query_selector`] at start; falls back to the window.
    Selector(String),
    Element(E),
}

/// How the widget reacts to viewport size changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeMode {
    #[default]
    Off,
    /// Attach a `resize` listener to the window.
    Listen,
    /// Re-check the scroll state every `n` milliseconds. `Poll(0)` is the same as `Off`.
    Poll(u64),
}

impl ResizeMode {
    pub(crate) fn normalized(self) -> Self {
        match self {
            Self::Poll(0) => Self::Off,
            other => other,
        }
    }
}

/// Configuration for [`crate::Elasticky`].
///
/// Fields are public; the `with_*` builders are provided for chaining. Defaults match the
/// classic widget: name `"header"`, the root element as container, window scrolling, fix at
/// the container's top padding, 50ms throttling, receding on with 70px up / 50px down limits.
#[derive(Clone, Debug)]
pub struct ElastickyOptions<E> {
    /// Class-name namespace (`is-{name}-fixed`, ...). Empty means `"header"`.
    pub name: String,
    pub container: Container<E>,
    pub scroll_elm: ScrollElm<E>,
    pub fix_at: Threshold,
    /// `None` releases at the same distance as `fix_at`.
    pub release_at: Option<Threshold>,
    /// Throttle window for scroll/resize handling. `0` disables throttling.
    pub delay_ms: u64,
    pub recede: Recede,
    /// Upward scroll (px) within the stability window before the header is shown.
    pub up_limit: f64,
    /// Downward scroll (px) within the stability window before the header is hidden.
    pub down_limit: f64,
    pub resize: ResizeMode,
}

impl<E> ElastickyOptions<E> {
    pub fn new() -> Self {
        Self {
            name: String::from("header"),
            container: Container::Root,
            scroll_elm: ScrollElm::Window,
            fix_at: Threshold::ContainerPaddingTop,
            release_at: None,
            delay_ms: 50,
            recede: Recede::Constant(true),
            up_limit: 70.0,
            down_limit: 50.0,
            resize: ResizeMode::Off,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_container(mut self, container: Container<E>) -> Self {
        self.container = container;
        self
    }

    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container = Container::Selector(selector.into());
        self
    }

    pub fn with_scroll_elm(mut self, scroll_elm: ScrollElm<E>) -> Self {
        self.scroll_elm = scroll_elm;
        self
    }

    pub fn with_scroll_selector(mut self, selector: impl Into<String>) -> Self {
        self.scroll_elm = ScrollElm::Selector(selector.into());
        self
    }

    pub fn with_fix_at(mut self, fix_at: impl Into<Threshold>) -> Self {
        self.fix_at = fix_at.into();
        self
    }

    pub fn with_fix_at_fn(mut self, f: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        self.fix_at = Threshold::computed(f);
        self
    }

    pub fn with_release_at(mut self, release_at: impl Into<Threshold>) -> Self {
        self.release_at = Some(release_at.into());
        self
    }

    pub fn with_release_at_fn(mut self, f: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        self.release_at = Some(Threshold::computed(f));
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_recede(mut self, recede: impl Into<Recede>) -> Self {
        self.recede = recede.into();
        self
    }

    pub fn with_recede_fn(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.recede = Recede::computed(f);
        self
    }

    pub fn with_limits(mut self, up_limit: f64, down_limit: f64) -> Self {
        self.up_limit = up_limit;
        self.down_limit = down_limit;
        self
    }

    pub fn with_resize(mut self, resize: ResizeMode) -> Self {
        self.resize = resize;
        self
    }

    /// The threshold used while fixed.
    pub fn effective_release_at(&self) -> &Threshold {
        self.release_at.as_ref().unwrap_or(&self.fix_at)
    }
}

impl<E> Default for ElastickyOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}
