use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::{ClassNames, Container, ElastickyOptions, Error, ResizeMode, ScrollElm};

/// Plain-data widget configuration, e.g. loaded from JSON or TOML.
///
/// Mirrors the classic option object: every key is optional and only keys that are present
/// override the defaults of [`ElastickyOptions::new`]. Elements can only be named by selector
/// here; use the builder for element handles or computed thresholds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElastickyConfig {
    pub name: Option<String>,
    pub container: Option<String>,
    pub scroll_elm: Option<String>,
    pub fix_at: Option<f64>,
    pub release_at: Option<f64>,
    pub delay: Option<u64>,
    pub recede: Option<bool>,
    pub up_limit: Option<f64>,
    pub down_limit: Option<f64>,
    pub onresize: Option<OnResize>,
}

/// `onresize: true | false | <poll interval ms>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OnResize {
    Listen(bool),
    Poll(u64),
}

impl From<OnResize> for ResizeMode {
    fn from(value: OnResize) -> Self {
        match value {
            OnResize::Listen(true) => Self::Listen,
            OnResize::Listen(false) | OnResize::Poll(0) => Self::Off,
            OnResize::Poll(ms) => Self::Poll(ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Widget(#[from] Error),
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    NegativeLimit { field: &'static str, value: f64 },
}

impl ElastickyConfig {
    /// Validates the configuration and merges it over the defaults.
    pub fn into_options<E>(self) -> Result<ElastickyOptions<E>, ConfigError> {
        let mut opts = ElastickyOptions::new();

        if let Some(name) = self.name {
            ClassNames::new(&name)?;
            opts.name = name;
        }
        if let Some(selector) = self.container {
            opts.container = Container::Selector(selector);
        }
        if let Some(selector) = self.scroll_elm {
            opts.scroll_elm = ScrollElm::Selector(selector);
        }
        if let Some(v) = self.fix_at {
            opts.fix_at = finite("fixAt", v)?.into();
        }
        if let Some(v) = self.release_at {
            opts.release_at = Some(finite("releaseAt", v)?.into());
        }
        if let Some(v) = self.delay {
            opts.delay_ms = v;
        }
        if let Some(v) = self.recede {
            opts.recede = v.into();
        }
        if let Some(v) = self.up_limit {
            opts.up_limit = limit("upLimit", v)?;
        }
        if let Some(v) = self.down_limit {
            opts.down_limit = limit("downLimit", v)?;
        }
        if let Some(v) = self.onresize {
            opts.resize = v.into();
        }
        Ok(opts)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn limit(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeLimit { field, value });
    }
    Ok(value)
}
