//! # domo-adapter-acme
//!
//! Adapter for the third-party Acme home bridge.
//!
//! The Acme SDK exposes its own `dial` call and error type; this crate wraps
//! it so the rest of the system talks to it through the native
//! [`DeviceLink`] port. The adapter is pure pass-through — one `connect`
//! becomes one `dial`, nothing translated beyond the error type.
//!
//! ## Dependency rule
//!
//! Depends on `domo-app` (port traits) and `domo-domain` only.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use domo_app::ports::DeviceLink;
use domo_domain::error::HomeError;

/// Errors reported by the Acme SDK.
#[derive(Debug, thiserror::Error)]
pub enum AcmeError {
    /// The bridge did not answer the dial.
    #[error("acme bridge unreachable")]
    Unreachable,
}

/// The vendor's bridge handle, as the Acme SDK ships it.
///
/// Not a [`DeviceLink`] — the vendor API predates the port and exposes a
/// `dial` call instead.
#[derive(Debug)]
pub struct AcmeBridge {
    reachable: bool,
    dials: AtomicUsize,
}

impl Default for AcmeBridge {
    fn default() -> Self {
        Self {
            reachable: true,
            dials: AtomicUsize::new(0),
        }
    }
}

impl AcmeBridge {
    /// Handle to a reachable bridge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to a bridge that never answers. Useful in tests.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            dials: AtomicUsize::new(0),
        }
    }

    /// Dial the bridge.
    ///
    /// # Errors
    ///
    /// Returns [`AcmeError::Unreachable`] when the bridge does not answer.
    pub fn dial(&self) -> Result<(), AcmeError> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        if self.reachable {
            tracing::info!("acme bridge answered");
            Ok(())
        } else {
            Err(AcmeError::Unreachable)
        }
    }

    /// How many times the bridge has been dialed.
    #[must_use]
    pub fn dial_count(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }
}

/// Wraps an [`AcmeBridge`] so it satisfies the native [`DeviceLink`] port.
#[derive(Debug, Default)]
pub struct AcmeLinkAdapter {
    bridge: AcmeBridge,
}

impl AcmeLinkAdapter {
    /// Wrap a bridge handle.
    #[must_use]
    pub fn new(bridge: AcmeBridge) -> Self {
        Self { bridge }
    }

    /// The wrapped vendor handle.
    #[must_use]
    pub fn bridge(&self) -> &AcmeBridge {
        &self.bridge
    }
}

impl DeviceLink for AcmeLinkAdapter {
    fn name(&self) -> &'static str {
        "acme"
    }

    fn connect(&self) -> impl Future<Output = Result<(), HomeError>> + Send {
        let result = self.bridge.dial().map_err(HomeError::adapter);
        async { result }
    }
}
