//! Home configuration — the JSON document naming devices to register.
//!
//! The document has a single recognised key, `devices`, holding an ordered
//! list of `{kind, name}` entries (`type` is accepted as an alias of `kind`
//! for compatibility with older documents). Unknown device kinds are
//! rejected here, at parse time, because [`DeviceKind`] is a closed enum.

use serde::Deserialize;

use domo_domain::device::DeviceKind;

/// One device entry in the home configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceEntry {
    /// Device kind tag; `type` accepted as an alias.
    #[serde(alias = "type")]
    pub kind: DeviceKind,
    /// Free-form device name.
    pub name: String,
}

/// Parsed home configuration.
///
/// A document without a `devices` key parses as an empty configuration;
/// whether that is ever intentional is questionable, so the facade logs a
/// warning when it applies one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeConfig {
    /// Devices to register, in order.
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

impl HomeConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HomeConfigError::Parse`] when the document is malformed or
    /// names an unknown device kind.
    pub fn from_json(document: &str) -> Result<Self, HomeConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`HomeConfigError::Io`] when the file cannot be read and
    /// [`HomeConfigError::Parse`] when its contents are malformed.
    pub fn load(path: &std::path::Path) -> Result<Self, HomeConfigError> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json(&document)
    }
}

/// Home-configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum HomeConfigError {
    /// File I/O failure.
    #[error("failed to read home configuration")]
    Io(#[from] std::io::Error),
    /// JSON parse failure (including unknown device kinds).
    #[error("failed to parse home configuration")]
    Parse(#[from] serde_json::Error),
}

impl From<HomeConfigError> for domo_domain::error::HomeError {
    fn from(err: HomeConfigError) -> Self {
        Self::config(err)
    }
}
