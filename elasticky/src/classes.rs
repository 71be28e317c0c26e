use alloc::format;
use alloc::string::{String, ToString};

use crate::Error;

const DEFAULT_NAME: &str = "header";

/// The four state classes a widget toggles: `is-{name}-(unfixed|fixed|hidden|shown)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassNames {
    pub unfixed: String,
    pub fixed: String,
    pub hidden: String,
    pub shown: String,
}

impl ClassNames {
    /// Builds the class names for `name`. An empty name means `"header"`.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        // DOM class tokens are split on ASCII whitespace.
        if name.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(Error::InvalidName(name.to_string()));
        }
        let prefix = format!("is-{name}");
        Ok(Self {
            unfixed: format!("{prefix}-unfixed"),
            fixed: format!("{prefix}-fixed"),
            hidden: format!("{prefix}-hidden"),
            shown: format!("{prefix}-shown"),
        })
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            unfixed: "is-header-unfixed".to_string(),
            fixed: "is-header-fixed".to_string(),
            hidden: "is-header-hidden".to_string(),
            shown: "is-header-shown".to_string(),
        }
    }
}
