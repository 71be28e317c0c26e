use alloc::sync::Arc;

use crate::Host;

/// A scroll distance (in CSS pixels) at which the widget changes state.
#[derive(Clone, Default)]
pub enum Threshold {
    Constant(f64),
    /// Re-evaluated on every tick.
    Computed(Arc<dyn Fn() -> f64 + Send + Sync>),
    /// The container's computed `padding-top`, truncated to whole pixels.
    #[default]
    ContainerPaddingTop,
}

impl Threshold {
    pub fn computed(f: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    /// Evaluates the threshold. `None` means there is nothing to compare against: either the
    /// container is not resolved yet or its padding did not parse.
    pub(crate) fn evaluate<H: Host>(&self, host: &H, container: Option<&H::Element>) -> Option<f64> {
        match self {
            Self::Constant(v) => Some(*v),
            Self::Computed(f) => Some(f()),
            Self::ContainerPaddingTop => {
                let container = container?;
                let raw = host.computed_padding_top(container);
                let parsed = parse_css_int(&raw);
                if parsed.is_none() {
                    ewarn!(value = %raw, "container padding-top is not numeric");
                }
                parsed
            }
        }
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl core::fmt::Debug for Threshold {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
            Self::ContainerPaddingTop => f.write_str("ContainerPaddingTop"),
        }
    }
}

/// Whether a fixed widget additionally hides/shows itself on scroll direction.
#[derive(Clone)]
pub enum Recede {
    Constant(bool),
    /// Re-evaluated on every tick.
    Computed(Arc<dyn Fn() -> bool + Send + Sync>),
}

impl Recede {
    pub fn computed(f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    pub fn evaluate(&self) -> bool {
        match self {
            Self::Constant(v) => *v,
            Self::Computed(f) => f(),
        }
    }
}

impl Default for Recede {
    fn default() -> Self {
        Self::Constant(true)
    }
}

impl From<bool> for Recede {
    fn from(value: bool) -> Self {
        Self::Constant(value)
    }
}

impl core::fmt::Debug for Recede {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Parses the leading integer of a CSS length the way base-10 `parseInt` does.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the first non-digit,
/// so `"12.7px"` yields `12`. Returns `None` when no digit is found.
pub fn parse_css_int(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n = 0.0f64;
    let mut any = false;
    for d in digits.bytes().take_while(u8::is_ascii_digit) {
        any = true;
        n = n * 10.0 + f64::from(d - b'0');
    }
    if !any {
        return None;
    }
    Some(if negative { -n } else { n })
}
