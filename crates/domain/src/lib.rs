//! # domo-domain
//!
//! Pure domain model for the domo home-automation controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (named controllable units: lights, thermostats)
//! - Define **Roles** (the validated set of callers allowed to ask for things)
//! - Define **Automation modes** (the closed set of selectable behaviours)
//! - Define **Security alerts** (the payload broadcast to observers)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod alert;
pub mod automation;
pub mod device;
pub mod role;
