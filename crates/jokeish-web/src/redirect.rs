//! Browser Redirect Trigger
//!
//! Sends the browser to the identity provider's `/authorize` endpoint.
//! Nothing comes back through this trigger: the provider redirects to the
//! configured callback when it is done.

use jokeish_core::{AuthConfig, AuthError, AuthTrigger, Result};

/// [`AuthTrigger`] that navigates `window.location` to the authorize URL
pub struct RedirectTrigger {
    config: AuthConfig,
}

impl RedirectTrigger {
    pub const fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl AuthTrigger for RedirectTrigger {
    fn authenticate(&self) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| AuthError::Unavailable("no browser window".into()))?;
        let location = window.location();

        // callback defaults to the page we were served from
        let origin = location.origin().ok();
        let url = self.config.authorize_url(origin.as_deref())?;

        tracing::info!(
            domain = %self.config.domain,
            client_id = %self.config.client_id,
            "Redirecting to identity provider"
        );

        location
            .set_href(url.as_str())
            .map_err(|e| AuthError::Redirect(format!("{e:?}")))
    }

    fn name(&self) -> &'static str {
        "redirect"
    }
}
