use dioxus::prelude::*;
use store::{AppearanceMode, ColorTheme, FontTheme, ThemePatch};

use crate::auth::{use_auth, SignOutButton};
use crate::icons::{FaCircleHalfStroke, FaMoon, FaSun};
use crate::notifications::{notify, notify_error, use_notifications, Level};
use crate::theme::use_theme;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Appearance,
    Profile,
}

/// Settings at `/settings`: appearance and profile tabs.
#[component]
pub fn SettingsView() -> Element {
    let mut tab = use_signal(|| Tab::Appearance);

    let tab_class = move |t: Tab| {
        if tab() == t {
            "settings-tab active"
        } else {
            "settings-tab"
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page settings-page",

            h1 { class: "view-title", "Settings" }

            div {
                class: "settings-tabs",
                button {
                    class: tab_class(Tab::Appearance),
                    onclick: move |_| tab.set(Tab::Appearance),
                    "Appearance"
                }
                button {
                    class: tab_class(Tab::Profile),
                    onclick: move |_| tab.set(Tab::Profile),
                    "Profile"
                }
            }

            {match tab() {
                Tab::Appearance => rsx! { AppearanceSettings {} },
                Tab::Profile => rsx! { ProfileSettings {} },
            }}
        }
    }
}

#[component]
fn AppearanceSettings() -> Element {
    let theme = use_theme();
    let notifications = use_notifications();
    let current = theme.preferences();

    let apply = move |patch: ThemePatch| {
        spawn(async move {
            match theme.update(patch).await {
                Ok(_) => notify(notifications, Level::Success, "Theme updated"),
                Err(e) => notify_error(notifications, format!("Failed to update theme: {e}")),
            }
        });
    };

    let card_class = |active: bool| {
        if active {
            "theme-card theme-card-active"
        } else {
            "theme-card"
        }
    };

    rsx! {
        section {
            class: "settings-section",
            h2 { class: "view-section-title", "Appearance" }
            div {
                class: "flex-row",
                for mode in AppearanceMode::ALL {
                    label {
                        key: "{mode.value()}",
                        class: card_class(current.appearance_mode == mode),
                        onclick: move |_| apply(ThemePatch::appearance(mode)),
                        {match mode {
                            AppearanceMode::Light => rsx! { Icon { icon: FaSun, width: 14, height: 14 } },
                            AppearanceMode::Dark => rsx! { Icon { icon: FaMoon, width: 14, height: 14 } },
                            AppearanceMode::Auto => rsx! { Icon { icon: FaCircleHalfStroke, width: 14, height: 14 } },
                        }}
                        div {
                            span { class: "theme-card-label", "{mode.label()}" }
                            span { class: "view-muted", "{mode.description()}" }
                        }
                    }
                }
            }
        }

        section {
            class: "settings-section",
            h2 { class: "view-section-title", "Color" }
            div {
                class: "color-grid",
                for color in ColorTheme::ALL {
                    button {
                        key: "{color.value()}",
                        class: card_class(current.color_theme == color),
                        title: "{color.label()}",
                        onclick: move |_| apply(ThemePatch::color(color)),
                        span { class: "color-swatch", "data-color": "{color.value()}" }
                        span { "{color.label()}" }
                    }
                }
            }
        }

        section {
            class: "settings-section",
            h2 { class: "view-section-title", "Font" }
            div {
                class: "font-list",
                for font in FontTheme::ALL {
                    label {
                        key: "{font.value()}",
                        class: card_class(current.font_theme == font),
                        "data-font": "{font.value()}",
                        onclick: move |_| apply(ThemePatch::font(font)),
                        span { class: "theme-card-label", "{font.label()}" }
                        span { class: "view-muted", "{font.description()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileSettings() -> Element {
    let auth = use_auth();

    rsx! {
        section {
            class: "settings-section",
            h2 { class: "view-section-title", "Profile" }
            if auth().loading {
                p { class: "view-muted", "Loading..." }
            } else if let Some(user) = auth().user {
                dl {
                    class: "profile-fields",
                    dt { "Name" }
                    dd { "{user.display_name()}" }
                    dt { "Email" }
                    dd { "{user.email}" }
                    dt { "User ID" }
                    dd { code { "{user.id}" } }
                }
                SignOutButton { class: "btn btn-outline" }
            } else {
                p { class: "view-muted", "You are signed out." }
            }
        }
    }
}
