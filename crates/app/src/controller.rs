//! Controller — the context through which devices are addressed.
//!
//! There is no process-global instance: the entry point constructs one
//! controller and hands it to the facade behind an [`Arc`](std::sync::Arc).
//! Everything that needs to address devices shares that handle; identity is
//! handle identity, not hidden global state.

use domo_domain::device::Device;

/// Addresses devices on behalf of the rest of the system.
///
/// The controller keeps no record of which devices exist; it only emits a
/// log line for each device it is asked to address.
#[derive(Debug, Default)]
pub struct Controller {
    _private: (),
}

impl Controller {
    /// Create a new controller. Call this once, in the entry point.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Address one device.
    pub fn address(&self, device: &Device) {
        tracing::info!(
            device = %device.name,
            kind = %device.kind,
            "controlling device"
        );
    }
}
