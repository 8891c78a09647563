//! Landing Copy
//!
//! The home view has exactly one visual state, so its text and styling
//! classes live here as a constant rather than inside the markup.

/// Text and class names rendered by the home view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub prompt: &'static str,
    pub cta_label: &'static str,
    pub container_class: &'static str,
    pub panel_class: &'static str,
    pub cta_class: &'static str,
}

impl HomeContent {
    /// The jokeish landing page
    pub const LANDING: Self = Self {
        title: "Jokeish",
        tagline: "A load of dad jokes XD",
        prompt: "Sign in to get access",
        cta_label: "Sign in",
        container_class: "container",
        panel_class: "col-xs-8 col-xs-offset-2 jumbotron text-center",
        cta_class: "btn btn-primary btn-lg btn-login btn-block",
    };

    /// Visible text fragments in render order
    pub const fn fragments(&self) -> [&'static str; 4] {
        [self.title, self.tagline, self.prompt, self.cta_label]
    }
}
