//! Auth Configuration
//!
//! Settings for redirecting the browser to an OAuth2 `/authorize` endpoint
//! (Auth0 in production). Values come from the build environment using
//! the `AUTH0_*` variable names, or from JSON embedded in the host page.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::{AuthError, Result};

pub const ENV_DOMAIN: &str = "AUTH0_DOMAIN";
pub const ENV_CLIENT_ID: &str = "AUTH0_CLIENT_ID";
pub const ENV_AUDIENCE: &str = "AUTH0_API_AUDIENCE";
pub const ENV_CALLBACK_URL: &str = "AUTH0_CALLBACK_URL";
pub const ENV_SCOPE: &str = "AUTH0_SCOPE";
pub const ENV_RESPONSE_TYPE: &str = "AUTH0_RESPONSE_TYPE";

/// Identity provider settings used by redirect-based triggers
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthConfig {
    /// Tenant domain, with or without scheme (e.g. "jokeish.eu.auth0.com")
    pub domain: String,

    /// OAuth2 client ID of the single-page application
    pub client_id: String,

    /// API audience the issued access token is meant for
    #[serde(default)]
    pub audience: Option<String>,

    /// Where the provider sends the user back; the page origin when unset
    #[serde(default)]
    pub redirect_uri: Option<String>,

    #[serde(default = "default_scope")]
    pub scope: String,

    #[serde(default = "default_response_type")]
    pub response_type: String,
}

fn default_scope() -> String {
    "openid profile".into()
}

fn default_response_type() -> String {
    "token id_token".into()
}

/// Per-redirect values the provider echoes back
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRequest {
    /// Opaque CSRF token returned unchanged on the callback
    pub state: String,

    /// Bound into the ID token; required for `id_token` response types
    pub nonce: String,
}

impl AuthRequest {
    /// Fresh random `state` and `nonce`
    pub fn generate() -> Self {
        Self {
            state: Uuid::new_v4().simple().to_string(),
            nonce: Uuid::new_v4().simple().to_string(),
        }
    }
}

impl AuthConfig {
    /// Create a configuration with defaults for the optional fields
    pub fn new(domain: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            client_id: client_id.into(),
            audience: None,
            redirect_uri: None,
            scope: default_scope(),
            response_type: default_response_type(),
        }
    }

    /// Build from a variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required =
            |key: &str| get(key).ok_or_else(|| AuthError::Config(format!("{key} not set")));

        Ok(Self {
            domain: required(ENV_DOMAIN)?,
            client_id: required(ENV_CLIENT_ID)?,
            audience: get(ENV_AUDIENCE),
            redirect_uri: get(ENV_CALLBACK_URL),
            scope: get(ENV_SCOPE).unwrap_or_else(default_scope),
            response_type: get(ENV_RESPONSE_TYPE).unwrap_or_else(default_response_type),
        })
    }

    /// Create from variables captured when the crate was compiled.
    ///
    /// A WASM bundle has no process environment, so this is what the
    /// browser build uses.
    pub fn from_build_env() -> Result<Self> {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_DOMAIN => option_env!("AUTH0_DOMAIN"),
                ENV_CLIENT_ID => option_env!("AUTH0_CLIENT_ID"),
                ENV_AUDIENCE => option_env!("AUTH0_API_AUDIENCE"),
                ENV_CALLBACK_URL => option_env!("AUTH0_CALLBACK_URL"),
                ENV_SCOPE => option_env!("AUTH0_SCOPE"),
                ENV_RESPONSE_TYPE => option_env!("AUTH0_RESPONSE_TYPE"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Parse from a JSON document, e.g. one embedded in the host page
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.domain.trim().is_empty() || config.client_id.trim().is_empty() {
            return Err(AuthError::Config("domain and client_id must not be empty".into()));
        }
        Ok(config)
    }

    /// Authorization endpoint URL for a sign-in redirect, with a freshly
    /// generated `state` and `nonce`.
    ///
    /// `fallback_redirect` is used when no `redirect_uri` is configured.
    pub fn authorize_url(&self, fallback_redirect: Option<&str>) -> Result<Url> {
        self.authorize_url_with(fallback_redirect, &AuthRequest::generate())
    }

    /// Authorization endpoint URL carrying the given `state` and `nonce`
    pub fn authorize_url_with(
        &self,
        fallback_redirect: Option<&str>,
        request: &AuthRequest,
    ) -> Result<Url> {
        let redirect_uri = self
            .redirect_uri
            .as_deref()
            .or(fallback_redirect)
            .ok_or_else(|| AuthError::Config("no redirect URI configured".into()))?;

        let mut base = if self.domain.contains("://") {
            self.domain.clone()
        } else {
            format!("https://{}", self.domain)
        };
        if !base.ends_with('/') {
            base.push('/');
        }

        let mut url = Url::parse(&base)?.join("authorize")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", &self.response_type)
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", redirect_uri);
            if let Some(audience) = &self.audience {
                query.append_pair("audience", audience);
            }
            query
                .append_pair("scope", &self.scope)
                .append_pair("state", &request.state)
                .append_pair("nonce", &request.nonce);
        }

        Ok(url)
    }
}
