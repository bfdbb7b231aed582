//! Security alert — the payload broadcast to observers on a breach.

use serde::{Deserialize, Serialize};

use crate::id::AlertId;
use crate::time::{Timestamp, now};

/// Message carried by every breach alert.
pub const BREACH_MESSAGE: &str = "Security breach detected!";

/// A security event delivered to every registered observer.
///
/// Alerts are immutable once constructed; all observers of one broadcast
/// receive the same alert value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub id: AlertId,
    pub message: String,
    pub raised_at: Timestamp,
}

impl SecurityAlert {
    /// Construct an alert with an arbitrary message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: AlertId::new(),
            message: message.into(),
            raised_at: now(),
        }
    }

    /// Construct the fixed breach alert.
    #[must_use]
    pub fn breach() -> Self {
        Self::new(BREACH_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_carry_fixed_message_for_breach() {
        let alert = SecurityAlert::breach();
        assert_eq!(alert.message, "Security breach detected!");
    }

    #[test]
    fn should_assign_distinct_ids_to_distinct_alerts() {
        let a = SecurityAlert::breach();
        let b = SecurityAlert::breach();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let alert = SecurityAlert::new("window opened");
        let json = serde_json::to_string(&alert).unwrap();
        let parsed: SecurityAlert = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, alert);
    }
}
