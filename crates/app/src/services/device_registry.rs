//! Device registry — append-only record of registered devices.

use domo_domain::device::Device;
use domo_domain::error::{HomeError, NotFoundError};
use domo_domain::id::DeviceId;

/// In-memory, append-only device registry.
///
/// Devices are recorded in registration order and never removed.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a device after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] if invariants fail.
    pub fn add(&mut self, device: Device) -> Result<DeviceId, HomeError> {
        device.validate()?;
        let id = device.id;
        self.devices.push(device);
        Ok(id)
    }

    /// Look up a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device with `id` exists.
    pub fn get(&self, id: DeviceId) -> Result<&Device, HomeError> {
        self.devices
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Device",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// All devices, in registration order.
    #[must_use]
    pub fn all(&self) -> &[Device] {
        &self.devices
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Device {
        Device::from_tag("light", "Lamp").unwrap()
    }

    #[test]
    fn should_record_device_and_return_its_id() {
        let mut registry = DeviceRegistry::new();
        let device = lamp();
        let id = device.id;

        let recorded = registry.add(device).unwrap();
        assert_eq!(recorded, id);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn should_reject_device_with_empty_name() {
        let mut registry = DeviceRegistry::new();
        let mut device = lamp();
        device.name = String::new();

        let result = registry.add(device);
        assert!(matches!(result, Err(HomeError::Validation(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn should_get_device_by_id() {
        let mut registry = DeviceRegistry::new();
        let id = registry.add(lamp()).unwrap();

        let fetched = registry.get(id).unwrap();
        assert_eq!(fetched.name, "Lamp");
    }

    #[test]
    fn should_return_not_found_for_unknown_id() {
        let registry = DeviceRegistry::new();
        let result = registry.get(DeviceId::new());
        assert!(matches!(result, Err(HomeError::NotFound(_))));
    }

    #[test]
    fn should_keep_devices_in_registration_order() {
        let mut registry = DeviceRegistry::new();
        registry.add(Device::from_tag("light", "Lamp").unwrap()).unwrap();
        registry
            .add(Device::from_tag("thermostat", "Therm").unwrap())
            .unwrap();

        let names: Vec<_> = registry.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Lamp", "Therm"]);
    }
}
