//! # domo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceLink` — connect an external bridge through the native call shape
//!   - `AlertObserver` — receive security alerts
//!   - `Command` — an executable, parameter-free operation
//! - Provide **use-case services**:
//!   - `DeviceRegistry` — append-only record of registered devices
//!   - `AutomationService` — hold and run the current automation mode
//!   - `SecuritySystem` — ordered observer list, breach broadcast
//!   - door access — lock, permission proxy, unlock command
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`UserNotifier`, the injected `Controller` context)
//! - Compose everything behind the `HomeSystem` facade
//!
//! ## Dependency rule
//! Depends on `domo-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod home_config;
pub mod notify;
pub mod ports;
pub mod services;
pub mod system;
