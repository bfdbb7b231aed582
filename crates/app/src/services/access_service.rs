//! Door access — lock, permission proxy, and the unlock command.

use std::future::Future;
use std::sync::Mutex;

use domo_domain::error::HomeError;
use domo_domain::role::Role;

use crate::ports::Command;

/// State of a door lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Result of asking for the door to be unlocked.
///
/// Denial is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The lock was released.
    Unlocked,
    /// The caller's role does not permit unlocking.
    Denied,
}

/// The physical door lock.
#[derive(Debug)]
pub struct DoorLock {
    state: Mutex<LockState>,
}

impl Default for DoorLock {
    fn default() -> Self {
        Self {
            state: Mutex::new(LockState::Locked),
        }
    }
}

impl DoorLock {
    /// Create a locked door lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the lock.
    pub fn unlock(&self) {
        let mut state = self.lock_state_mut();
        *state = LockState::Unlocked;
        tracing::info!("door unlocked");
    }

    /// Current lock state.
    #[must_use]
    pub fn state(&self) -> LockState {
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_state_mut(&self) -> std::sync::MutexGuard<'_, LockState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Permission-gating wrapper around a [`DoorLock`].
///
/// Only [`Role::Admin`] may release the wrapped lock; every other role is
/// denied and the lock is never touched.
#[derive(Debug)]
pub struct DoorLockProxy {
    lock: DoorLock,
    role: Role,
}

impl DoorLockProxy {
    /// Wrap a lock on behalf of a caller with the given role.
    #[must_use]
    pub fn new(lock: DoorLock, role: Role) -> Self {
        Self { lock, role }
    }

    /// Release the wrapped lock if the caller's role permits it.
    pub fn unlock(&self) -> UnlockOutcome {
        if self.role == Role::Admin {
            self.lock.unlock();
            UnlockOutcome::Unlocked
        } else {
            tracing::warn!(role = %self.role, "access denied: insufficient permissions");
            UnlockOutcome::Denied
        }
    }

    /// State of the wrapped lock.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }
}

/// Command that asks the proxy to unlock the door.
#[derive(Debug)]
pub struct UnlockDoorCommand {
    proxy: DoorLockProxy,
}

impl UnlockDoorCommand {
    /// Capture the proxy this command will delegate to.
    #[must_use]
    pub fn new(proxy: DoorLockProxy) -> Self {
        Self { proxy }
    }

    /// Build the full lock → proxy → command chain for one caller.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self::new(DoorLockProxy::new(DoorLock::new(), role))
    }
}

impl Command for UnlockDoorCommand {
    type Outcome = UnlockOutcome;

    fn execute(&self) -> impl Future<Output = Result<UnlockOutcome, HomeError>> + Send {
        let outcome = self.proxy.unlock();
        async move { Ok(outcome) }
    }
}
