//! Device link port — the call shape shared by native and bridged devices.

use std::future::Future;

use domo_domain::error::HomeError;

/// Something the controller can establish a connection to.
///
/// Native integrations implement this directly; third-party bridges are
/// wrapped by an adapter in their own crate so they expose the same shape.
pub trait DeviceLink {
    /// Short name identifying the link (e.g. `"acme"`), used in logs.
    fn name(&self) -> &'static str;

    /// Establish the connection.
    fn connect(&self) -> impl Future<Output = Result<(), HomeError>> + Send;
}
