//! Identity context and hooks for the UI.

use api::UserIdentity;
use dioxus::prelude::*;

use crate::notifications::{notify_error, use_notifications};

/// Identity of the signed-in user as seen by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Fetches the current identity once and provides it to `children`.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => auth_state.set(AuthState {
                user,
                loading: false,
            }),
            Err(e) => {
                tracing::error!("Failed to load current user: {}", e);
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Renders `children` only for a signed-in user; otherwise a sign-in screen.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "auth-screen", p { "Loading..." } }
        };
    }

    if state.user.is_none() {
        return rsx! {
            div {
                class: "auth-screen",
                h1 { "Notes" }
                p { "You are signed out." }
                SignInButton { class: "btn btn-primary" }
            }
        };
    }

    rsx! {
        {children}
    }
}

/// Button that starts a session for the configured identity.
#[component]
pub fn SignInButton(
    #[props(default = "Sign in".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let notifications = use_notifications();
    let mut loading = use_signal(|| false);

    let onclick = move |_| async move {
        loading.set(true);
        match api::login().await {
            Ok(user) => auth_state.set(AuthState {
                user: Some(user),
                loading: false,
            }),
            Err(e) => notify_error(notifications, format!("Failed to sign in: {e}")),
        }
        loading.set(false);
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Signing in..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button that signs the current user out and returns to the root.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let notifications = use_notifications();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
            }
            Err(e) => notify_error(notifications, format!("Failed to sign out: {e}")),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
