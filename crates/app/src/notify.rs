//! In-process observer implementations.

use std::future::Future;

use domo_domain::alert::SecurityAlert;
use domo_domain::error::HomeError;

use crate::ports::AlertObserver;

/// Observer that notifies a named user by logging the alert message.
///
/// This is the in-process delivery channel; real push channels (SMS, app
/// notifications) would be adapter crates implementing the same port.
#[derive(Debug, Clone)]
pub struct UserNotifier {
    user: String,
}

impl UserNotifier {
    /// Create a notifier for the given user name.
    #[must_use]
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// The user this notifier delivers to.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}

impl AlertObserver for UserNotifier {
    fn notify(&self, alert: &SecurityAlert) -> impl Future<Output = Result<(), HomeError>> + Send {
        tracing::info!(user = %self.user, message = %alert.message, "user notified");
        async { Ok(()) }
    }
}
