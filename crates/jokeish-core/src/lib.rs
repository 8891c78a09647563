//! # jokeish-core
//!
//! Platform-neutral pieces of the jokeish landing page.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  click   ┌─────────────┐  authenticate()  ┌──────────────────┐
//! │   HomePage   │─────────▶│   sign_in   │─────────────────▶│   AuthTrigger    │
//! │ (HomeContent)│          │  (handoff)  │                  │   (Strategy)     │
//! └──────────────┘          └─────────────┘                  └──────────────────┘
//! ```
//!
//! The view never knows which identity provider sits behind the trigger.
//! The browser build plugs in a redirect to an OAuth2 authorize endpoint,
//! tests plug in closures.

pub mod auth;
pub mod config;
pub mod content;
pub mod error;

pub use auth::{AuthTrigger, sign_in};
pub use config::{AuthConfig, AuthRequest};
pub use content::HomeContent;
pub use error::{AuthError, Result};
