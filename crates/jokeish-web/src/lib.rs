//! jokeish Web Frontend
//!
//! Leptos-based WASM frontend serving the jokeish landing page. The page
//! hands sign-in off to whatever [`AuthTrigger`](jokeish_core::AuthTrigger)
//! it is given; the browser build uses [`RedirectTrigger`].

mod app;
mod components;
mod pages;
#[cfg(feature = "csr")]
mod redirect;

pub use app::App;
pub use components::SignInButton;
pub use pages::HomePage;
#[cfg(feature = "csr")]
pub use redirect::RedirectTrigger;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    use std::sync::Arc;

    use jokeish_core::AuthTrigger;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let config = load_config().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let trigger: Arc<dyn AuthTrigger> = Arc::new(RedirectTrigger::new(config));

    tracing::info!(trigger = trigger.name(), "Mounting jokeish");
    leptos::mount::mount_to_body(move || view! { <App trigger=trigger /> });

    Ok(())
}

/// Id of the `<script type="application/json">` element carrying auth config
#[cfg(feature = "csr")]
pub const CONFIG_ELEMENT_ID: &str = "jokeish-auth-config";

/// Config embedded in the host page wins over values baked in at build time
#[cfg(feature = "csr")]
fn load_config() -> jokeish_core::Result<jokeish_core::AuthConfig> {
    use jokeish_core::AuthConfig;

    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match embedded {
        Some(json) => {
            tracing::debug!(element = CONFIG_ELEMENT_ID, "Loading embedded auth config");
            AuthConfig::from_json(&json)
        }
        None => AuthConfig::from_build_env(),
    }
}
