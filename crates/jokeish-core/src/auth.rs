//! Authentication Trigger Strategy
//!
//! The landing view only announces that the user wants to sign in. Whatever
//! happens next belongs to an [`AuthTrigger`] handed to the view by its
//! owner.
//!
//! ## Usage
//!
//! ```rust
//! use jokeish_core::{AuthError, sign_in};
//!
//! let trigger = || -> Result<(), AuthError> { Ok(()) };
//! sign_in(&trigger);
//! ```

use crate::error::Result;

/// Capability to start authentication with an external identity system
pub trait AuthTrigger: Send + Sync {
    /// Hand off to the identity system
    fn authenticate(&self) -> Result<()>;

    /// Name used in log output
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> AuthTrigger for F
where
    F: Fn() -> Result<()> + Send + Sync,
{
    fn authenticate(&self) -> Result<()> {
        self()
    }
}

/// Forward a sign-in request to the trigger.
///
/// Called once per activation of the call-to-action. The outcome is not
/// reported back to the view: failures are logged and dropped.
pub fn sign_in(trigger: &dyn AuthTrigger) {
    tracing::debug!(trigger = trigger.name(), "Sign-in requested");

    if let Err(e) = trigger.authenticate() {
        tracing::warn!(trigger = trigger.name(), error = %e, "Authentication trigger failed");
    }
}
