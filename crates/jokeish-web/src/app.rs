//! Main App Component

use std::sync::Arc;

use jokeish_core::AuthTrigger;
use leptos::prelude::*;

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App(trigger: Arc<dyn AuthTrigger>) -> impl IntoView {
    view! {
        <main class="app">
            <HomePage trigger=trigger />
        </main>
    }
}
