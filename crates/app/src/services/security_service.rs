//! Security system — ordered observer list and breach broadcast.

use domo_domain::alert::SecurityAlert;
use domo_domain::error::HomeError;

use crate::ports::AlertObserver;

/// Broadcasts security alerts to registered observers.
///
/// Observers are kept in registration order and never removed. Delivery is
/// sequential: each observer is awaited before the next is notified, and an
/// error from one observer aborts delivery to the rest.
pub struct SecuritySystem<O> {
    observers: Vec<O>,
}

impl<O> Default for SecuritySystem<O> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<O: AlertObserver> SecuritySystem<O> {
    /// Create a system with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer at the end of the delivery order.
    pub fn add_observer(&mut self, observer: O) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver one alert to every observer, in registration order.
    ///
    /// Returns the number of observers notified.
    ///
    /// # Errors
    ///
    /// Propagates the first observer error; later observers are not
    /// notified.
    pub async fn broadcast(&self, alert: &SecurityAlert) -> Result<usize, HomeError> {
        for observer in &self.observers {
            observer.notify(alert).await?;
        }
        Ok(self.observers.len())
    }

    /// Raise the fixed breach alert and broadcast it.
    ///
    /// # Errors
    ///
    /// Propagates the first observer error; later observers are not
    /// notified.
    pub async fn breach_detected(&self) -> Result<usize, HomeError> {
        let alert = SecurityAlert::breach();
        tracing::warn!(alert = %alert.id, message = %alert.message, "security breach detected");
        self.broadcast(&alert).await
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    use domo_domain::error::NotFoundError;

    use super::*;

    /// Records every message it receives into a shared journal, and can be
    /// configured to fail instead.
    struct RecordingObserver {
        label: &'static str,
        journal: Arc<Mutex<Vec<(&'static str, String)>>>,
        fail: bool,
    }

    impl RecordingObserver {
        fn new(label: &'static str, journal: Arc<Mutex<Vec<(&'static str, String)>>>) -> Self {
            Self {
                label,
                journal,
                fail: false,
            }
        }

        fn failing(label: &'static str, journal: Arc<Mutex<Vec<(&'static str, String)>>>) -> Self {
            Self {
                label,
                journal,
                fail: true,
            }
        }
    }

    impl AlertObserver for RecordingObserver {
        fn notify(
            &self,
            alert: &SecurityAlert,
        ) -> impl Future<Output = Result<(), HomeError>> + Send {
            let result = if self.fail {
                Err(NotFoundError {
                    entity: "Observer",
                    id: self.label.to_string(),
                }
                .into())
            } else {
                let mut journal = self.journal.lock().unwrap();
                journal.push((self.label, alert.message.clone()));
                Ok(())
            };
            async { result }
        }
    }

    fn journal() -> Arc<Mutex<Vec<(&'static str, String)>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[tokio::test]
    async fn should_notify_every_observer_in_registration_order() {
        let journal = journal();
        let mut system = SecuritySystem::new();
        system.add_observer(RecordingObserver::new("first", Arc::clone(&journal)));
        system.add_observer(RecordingObserver::new("second", Arc::clone(&journal)));
        system.add_observer(RecordingObserver::new("third", Arc::clone(&journal)));

        let notified = system.breach_detected().await.unwrap();
        assert_eq!(notified, 3);

        let entries = journal.lock().unwrap();
        let order: Vec<_> = entries.iter().map(|(label, _)| *label).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn should_deliver_identical_message_to_all_observers() {
        let journal = journal();
        let mut system = SecuritySystem::new();
        system.add_observer(RecordingObserver::new("a", Arc::clone(&journal)));
        system.add_observer(RecordingObserver::new("b", Arc::clone(&journal)));

        system.breach_detected().await.unwrap();

        let entries = journal.lock().unwrap();
        assert!(
            entries
                .iter()
                .all(|(_, message)| message == "Security breach detected!")
        );
    }

    #[tokio::test]
    async fn should_report_zero_notified_when_no_observers() {
        let system: SecuritySystem<RecordingObserver> = SecuritySystem::new();
        let notified = system.breach_detected().await.unwrap();
        assert_eq!(notified, 0);
    }

    #[tokio::test]
    async fn should_abort_remaining_deliveries_when_observer_fails() {
        let journal = journal();
        let mut system = SecuritySystem::new();
        system.add_observer(RecordingObserver::new("before", Arc::clone(&journal)));
        system.add_observer(RecordingObserver::failing("broken", Arc::clone(&journal)));
        system.add_observer(RecordingObserver::new("after", Arc::clone(&journal)));

        let result = system.breach_detected().await;
        assert!(matches!(result, Err(HomeError::NotFound(_))));

        let entries = journal.lock().unwrap();
        let order: Vec<_> = entries.iter().map(|(label, _)| *label).collect();
        assert_eq!(order, ["before"]);
    }

    #[tokio::test]
    async fn should_broadcast_custom_alert_unchanged() {
        let journal = journal();
        let mut system = SecuritySystem::new();
        system.add_observer(RecordingObserver::new("only", Arc::clone(&journal)));

        let alert = SecurityAlert::new("window opened");
        system.broadcast(&alert).await.unwrap();

        let entries = journal.lock().unwrap();
        assert_eq!(entries[0].1, "window opened");
    }

    #[test]
    fn should_count_observers_in_registration_order() {
        let journal = journal();
        let mut system = SecuritySystem::new();
        assert_eq!(system.observer_count(), 0);
        system.add_observer(RecordingObserver::new("one", Arc::clone(&journal)));
        system.add_observer(RecordingObserver::new("two", journal));
        assert_eq!(system.observer_count(), 2);
    }
}
