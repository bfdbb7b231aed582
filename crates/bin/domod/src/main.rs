//! # domod — domo daemon
//!
//! Composition root that wires the controller, services, and adapters
//! together and runs the home.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise tracing
//! - Construct the controller and inject it into the facade
//! - Load the home configuration and register its devices
//! - Run the startup sequence: connect the bridge, select and run the
//!   automation mode, register observers, raise the demo breach, and
//!   exercise the door unlock with both role levels
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use domo_adapter_acme::{AcmeBridge, AcmeLinkAdapter};
use domo_app::controller::Controller;
use domo_app::notify::UserNotifier;
use domo_app::system::HomeSystem;
use domo_domain::role::Role;

use config::Config;

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    // The controller is built once, here, and shared by handle.
    let controller = Arc::new(Controller::new());
    let mut home: HomeSystem<UserNotifier> = HomeSystem::new(controller);

    let registered = home.load_configuration(Path::new(&config.home.config_path))?;
    tracing::info!(devices = registered, "home configured");

    let bridge = AcmeLinkAdapter::new(AcmeBridge::new());
    home.connect_link(&bridge).await?;

    home.set_automation_mode(config.home.default_mode);
    home.run_automation();

    for user in &config.security.users {
        home.add_observer(UserNotifier::new(user));
    }
    let notified = home.detect_security_breach().await?;
    tracing::info!(observers = notified, "breach broadcast complete");

    // A non-admin is denied, an admin gets through.
    let denied = home.unlock_door(Role::User).await?;
    tracing::info!(outcome = ?denied, "unlock attempt as user");
    let granted = home.unlock_door(Role::Admin).await?;
    tracing::info!(outcome = ?granted, "unlock attempt as admin");

    Ok(())
}
