//! Observer port — delivery of security alerts.

use std::future::Future;

use domo_domain::alert::SecurityAlert;
use domo_domain::error::HomeError;

/// A party notified when a security alert is raised.
///
/// Observers are awaited one at a time in registration order; an error from
/// one observer aborts delivery to the rest.
pub trait AlertObserver {
    /// Deliver one alert to this observer.
    fn notify(&self, alert: &SecurityAlert) -> impl Future<Output = Result<(), HomeError>> + Send;
}

impl<T: AlertObserver + Send + Sync> AlertObserver for std::sync::Arc<T> {
    fn notify(&self, alert: &SecurityAlert) -> impl Future<Output = Result<(), HomeError>> + Send {
        (**self).notify(alert)
    }
}
