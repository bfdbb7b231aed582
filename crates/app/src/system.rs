//! The home system facade — composes controller, registry, automation,
//! and security behind one surface.

use std::path::Path;
use std::sync::Arc;

use domo_domain::automation::AutomationMode;
use domo_domain::device::Device;
use domo_domain::error::HomeError;
use domo_domain::id::DeviceId;
use domo_domain::role::Role;

use crate::controller::Controller;
use crate::home_config::HomeConfig;
use crate::ports::{AlertObserver, Command, DeviceLink};
use crate::services::access_service::{UnlockDoorCommand, UnlockOutcome};
use crate::services::automation_service::{AutomationOutcome, AutomationService};
use crate::services::device_registry::DeviceRegistry;
use crate::services::security_service::SecuritySystem;

/// High-level surface over the whole home.
///
/// The controller is injected by the entry point and shared through an
/// [`Arc`]; the facade owns everything else.
pub struct HomeSystem<O> {
    controller: Arc<Controller>,
    registry: DeviceRegistry,
    automation: AutomationService,
    security: SecuritySystem<O>,
}

impl<O: AlertObserver> HomeSystem<O> {
    /// Compose a home system around an injected controller.
    #[must_use]
    pub fn new(controller: Arc<Controller>) -> Self {
        Self {
            controller,
            registry: DeviceRegistry::new(),
            automation: AutomationService::new(),
            security: SecuritySystem::new(),
        }
    }

    /// A shared handle to the injected controller.
    #[must_use]
    pub fn controller(&self) -> Arc<Controller> {
        Arc::clone(&self.controller)
    }

    /// Create a device from a raw tag and register it.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] for an unknown tag or empty name.
    pub fn add_device(&mut self, tag: &str, name: &str) -> Result<DeviceId, HomeError> {
        let device = Device::from_tag(tag, name)?;
        self.register(device)
    }

    fn register(&mut self, device: Device) -> Result<DeviceId, HomeError> {
        tracing::info!(device = %device.name, kind = %device.kind, "added device");
        self.controller.address(&device);
        self.registry.add(device)
    }

    /// Look up a registered device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device with `id` exists.
    pub fn device(&self, id: DeviceId) -> Result<&Device, HomeError> {
        self.registry.get(id)
    }

    /// All registered devices, in registration order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        self.registry.all()
    }

    /// Read a home configuration file and register every device it names,
    /// in order. Returns the number of devices registered.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Config`] when the file cannot be read or
    /// parsed, and [`HomeError::Validation`] when an entry is invalid.
    pub fn load_configuration(&mut self, path: &Path) -> Result<usize, HomeError> {
        let config = HomeConfig::load(path)?;
        self.apply_configuration(config)
    }

    /// Register every device named by an already-parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when an entry is invalid.
    pub fn apply_configuration(&mut self, config: HomeConfig) -> Result<usize, HomeError> {
        if config.devices.is_empty() {
            tracing::warn!("home configuration names no devices");
        }
        let count = config.devices.len();
        for entry in config.devices {
            let device = Device::builder().kind(entry.kind).name(entry.name).build()?;
            self.register(device)?;
        }
        tracing::info!(devices = count, "configuration loaded");
        Ok(count)
    }

    /// Replace the automation mode, returning the previous one.
    pub fn set_automation_mode(&mut self, mode: AutomationMode) -> Option<AutomationMode> {
        self.automation.set_mode(mode)
    }

    /// Run the current automation mode, if any.
    pub fn run_automation(&self) -> AutomationOutcome {
        self.automation.run()
    }

    /// Register a security observer at the end of the delivery order.
    pub fn add_observer(&mut self, observer: O) {
        self.security.add_observer(observer);
    }

    /// Number of registered security observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.security.observer_count()
    }

    /// Raise the breach alert and notify every observer in order.
    ///
    /// Returns the number of observers notified.
    ///
    /// # Errors
    ///
    /// Propagates the first observer error; later observers are not
    /// notified.
    pub async fn detect_security_breach(&self) -> Result<usize, HomeError> {
        self.security.breach_detected().await
    }

    /// Attempt to unlock the door on behalf of a caller with `role`.
    ///
    /// Denial is reported through the outcome, never as an error.
    ///
    /// # Errors
    ///
    /// Propagates command execution failures.
    pub async fn unlock_door(&self, role: Role) -> Result<UnlockOutcome, HomeError> {
        UnlockDoorCommand::for_role(role).execute().await
    }

    /// Connect an external device link through its adapter.
    ///
    /// # Errors
    ///
    /// Propagates the link's connection error.
    pub async fn connect_link(&self, link: &impl DeviceLink) -> Result<(), HomeError> {
        tracing::info!(link = link.name(), "connecting device link");
        link.connect().await
    }
}
