//! Device — a named controllable unit in the home.
//!
//! The set of device kinds is closed: unknown type tags are rejected when
//! they are parsed, not when the device is used.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HomeError, ValidationError};
use crate::id::DeviceId;
use crate::time::{Timestamp, now};

/// The closed set of device kinds the controller knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// A dimmable or switchable light.
    Light,
    /// A temperature controller.
    Thermostat,
}

impl DeviceKind {
    /// The lowercase tag used in configuration documents.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat => "thermostat",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for DeviceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "thermostat" => Ok(Self::Thermostat),
            other => Err(ValidationError::UnknownDeviceKind(other.to_string())),
        }
    }
}

/// A named controllable unit (light, thermostat) in the home.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub kind: DeviceKind,
    pub name: String,
    pub added_at: Timestamp,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Build a device from a raw type tag and a name.
    ///
    /// This is the entry point for untyped input (configuration entries,
    /// user-supplied tags).
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when:
    /// - `tag` does not name a known kind ([`ValidationError::UnknownDeviceKind`])
    /// - `name` is empty ([`ValidationError::EmptyName`])
    pub fn from_tag(tag: &str, name: impl Into<String>) -> Result<Self, HomeError> {
        let kind: DeviceKind = tag.parse()?;
        Self::builder().kind(kind).name(name).build()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HomeError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    kind: Option<DeviceKind>,
    name: Option<String>,
    added_at: Option<Timestamp>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn added_at(mut self, ts: Timestamp) -> Self {
        self.added_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Device, HomeError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            kind: self.kind.unwrap_or(DeviceKind::Light),
            name: self.name.unwrap_or_default(),
            added_at: self.added_at.unwrap_or_else(now),
        };
        device.validate()?;
        Ok(device)
    }
}
