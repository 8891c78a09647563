//! UI Components

use std::sync::Arc;

use jokeish_core::{AuthTrigger, sign_in};
use leptos::prelude::*;

/// Call-to-action that hands off to the auth trigger on every click
#[component]
pub fn SignInButton(
    trigger: Arc<dyn AuthTrigger>,
    label: &'static str,
    button_class: &'static str,
) -> impl IntoView {
    view! {
        <a class=button_class on:click=move |_| sign_in(trigger.as_ref())>
            {label}
        </a>
    }
}

#[cfg(all(test, target_arch = "wasm32", feature = "csr"))]
mod tests {
    use super::*;
    use jokeish_core::AuthError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_each_click_authenticates_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let trigger: Arc<dyn AuthTrigger> = Arc::new(move || -> Result<(), AuthError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let document = web_sys::window().unwrap().document().unwrap();
        let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&host).unwrap();

        let _mounted = leptos::mount::mount_to(host.clone(), move || {
            view! { <SignInButton trigger=trigger label="Sign in" button_class="btn" /> }
        });

        let button: HtmlElement = host.query_selector("a.btn").unwrap().unwrap().unchecked_into();
        assert_eq!(button.text_content().as_deref(), Some("Sign in"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        button.click();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        button.click();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
