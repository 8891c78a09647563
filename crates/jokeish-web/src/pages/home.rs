//! Home Page

use std::sync::Arc;

use jokeish_core::{AuthTrigger, HomeContent};
use leptos::prelude::*;

use crate::components::SignInButton;

/// Landing page. Static apart from the sign-in call-to-action.
#[component]
pub fn HomePage(trigger: Arc<dyn AuthTrigger>) -> impl IntoView {
    let content = HomeContent::LANDING;

    view! {
        <div class=content.container_class>
            <div class=content.panel_class>
                <h1>{content.title}</h1>
                <p>{content.tagline}</p>
                <p>{content.prompt}</p>
                <SignInButton
                    trigger=trigger
                    label=content.cta_label
                    button_class=content.cta_class
                />
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use jokeish_core::AuthError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_trigger() -> (Arc<dyn AuthTrigger>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let trigger: Arc<dyn AuthTrigger> = Arc::new(move || -> Result<(), AuthError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        (trigger, calls)
    }

    fn render(trigger: Arc<dyn AuthTrigger>) -> String {
        view! { <HomePage trigger=trigger /> }.to_html()
    }

    #[test]
    fn test_renders_copy_in_order() {
        let (trigger, _) = counting_trigger();
        let html = render(trigger);

        let mut last = 0;
        for fragment in HomeContent::LANDING.fragments() {
            let needle = format!(">{fragment}<");
            let pos = html[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{fragment:?} missing or out of order in {html}"));
            last += pos + needle.len();
        }
    }

    #[test]
    fn test_renders_layout_classes() {
        let (trigger, _) = counting_trigger();
        let html = render(trigger);

        assert!(html.contains(r#"<div class="container">"#));
        assert!(html.contains(r#"class="col-xs-8 col-xs-offset-2 jumbotron text-center""#));
        assert!(html.contains(r#"<a class="btn btn-primary btn-lg btn-login btn-block""#));
        assert!(html.contains("<h1>Jokeish</h1>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let (trigger, _) = counting_trigger();
        let first = render(trigger.clone());
        let second = render(trigger);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_does_not_authenticate() {
        let (trigger, calls) = counting_trigger();
        render(trigger.clone());
        render(trigger);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_render_with_failing_trigger() {
        let trigger: Arc<dyn AuthTrigger> = Arc::new(|| -> Result<(), AuthError> {
            Err(AuthError::Unavailable("offline".into()))
        });
        assert!(render(trigger).contains(">Sign in<"));
    }
}
