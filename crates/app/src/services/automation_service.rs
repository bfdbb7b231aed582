//! Automation service — holds and runs the current automation mode.

use domo_domain::automation::AutomationMode;

/// Result of asking the home to run its automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationOutcome {
    /// The current mode ran.
    Ran(AutomationMode),
    /// No mode has been selected yet.
    NoModeSet,
}

/// Holds zero or one current [`AutomationMode`].
#[derive(Debug, Default)]
pub struct AutomationService {
    mode: Option<AutomationMode>,
}

impl AutomationService {
    /// Create a service with no mode selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current mode unconditionally, returning the previous one.
    pub fn set_mode(&mut self, mode: AutomationMode) -> Option<AutomationMode> {
        tracing::info!(mode = %mode, "automation mode selected");
        self.mode.replace(mode)
    }

    /// The currently selected mode, if any.
    #[must_use]
    pub fn current_mode(&self) -> Option<AutomationMode> {
        self.mode
    }

    /// Run the current mode if one is set.
    pub fn run(&self) -> AutomationOutcome {
        match self.mode {
            Some(mode) => {
                tracing::info!(mode = %mode, "activating automation mode");
                AutomationOutcome::Ran(mode)
            }
            None => {
                tracing::warn!("no automation mode set");
                AutomationOutcome::NoModeSet
            }
        }
    }
}
