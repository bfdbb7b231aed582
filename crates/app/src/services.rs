//! Use-case services composing domain objects.

pub mod access_service;
pub mod automation_service;
pub mod device_registry;
pub mod security_service;
