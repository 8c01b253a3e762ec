use api::AppConfig;
use dioxus::prelude::*;

/// Load the server's [`AppConfig`] once and share it with `children`.
///
/// Until the server answers, components see the defaults.
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    let mut config = use_context_provider(|| Signal::new(AppConfig::default()));

    let _ = use_resource(move || async move {
        match api::get_config().await {
            Ok(loaded) => config.set(loaded),
            Err(e) => tracing::warn!("Using default configuration: {}", e),
        }
    });

    rsx! {
        {children}
    }
}

pub fn use_app_config() -> Signal<AppConfig> {
    use_context::<Signal<AppConfig>>()
}
