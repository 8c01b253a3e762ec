//! Theme context.
//!
//! [`ThemeProvider`] owns the user's [`ThemePreferences`]. Components read
//! them through [`use_theme`] and change them only through
//! [`ThemeContext::update`], which persists the patch on the server and
//! adopts whatever record the server returns.

use api::{ThemePatch, ThemePreferences};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    prefs: Signal<ThemePreferences>,
    prefers_dark: Signal<bool>,
}

impl ThemeContext {
    pub fn preferences(&self) -> ThemePreferences {
        (self.prefs)()
    }

    pub fn is_dark(&self) -> bool {
        self.preferences().is_dark((self.prefers_dark)())
    }

    /// Persist `patch`. Local state only changes once the server accepts it.
    pub async fn update(mut self, patch: ThemePatch) -> Result<ThemePreferences, ServerFnError> {
        let saved = api::set_theme(patch).await?;
        self.prefs.set(saved);
        Ok(saved)
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut prefs = use_signal(ThemePreferences::default);
    let mut prefers_dark = use_signal(|| false);

    let _ = use_resource(move || async move {
        match api::get_theme().await {
            Ok(saved) => prefs.set(saved),
            Err(e) => tracing::warn!("Using default theme: {}", e),
        }
    });

    // OS colour scheme, kept current for the `auto` appearance mode.
    use_future(move || async move {
        let mut eval = document::eval(
            r#"(function() {
                var query = window.matchMedia('(prefers-color-scheme: dark)');
                dioxus.send(query.matches);
                query.addEventListener('change', function(e) { dioxus.send(e.matches); });
            })();"#,
        );
        while let Ok(dark) = eval.recv::<bool>().await {
            prefers_dark.set(dark);
        }
    });

    use_effect(move || {
        let current = prefs();
        apply_theme(current, current.is_dark(prefers_dark()));
    });

    use_context_provider(|| ThemeContext { prefs, prefers_dark });

    rsx! {
        {children}
    }
}

/// Reflect the preferences on the document root.
fn apply_theme(prefs: ThemePreferences, dark: bool) {
    let js = format!(
        r#"(function() {{
            var root = document.documentElement;
            root.dataset.colorTheme = '{color}';
            root.dataset.fontTheme = '{font}';
            root.classList.toggle('dark', {dark});
        }})();"#,
        color = prefs.color_theme.value(),
        font = prefs.font_theme.value(),
    );
    document::eval(&js);
}
