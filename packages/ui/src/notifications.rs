//! Transient user-facing notifications.
//!
//! Every backend failure ends up here as an error entry; successes get a
//! short confirmation. Entries dismiss themselves after their lifetime.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

const DEFAULT_LIFETIME: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notification>,
    next_id: u64,
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Push a notification that disappears after `lifetime`.
pub fn notify_for(log: Signal<Notifications>, level: Level, message: impl Into<String>, lifetime: Duration) {
    let mut log = log;
    let id = {
        let mut state = log.write();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(Notification {
            id,
            level,
            message: message.into(),
        });
        id
    };
    spawn(async move {
        sleep(lifetime).await;
        log.write().entries.retain(|n| n.id != id);
    });
}

pub fn notify(log: Signal<Notifications>, level: Level, message: impl Into<String>) {
    notify_for(log, level, message, DEFAULT_LIFETIME);
}

pub fn notify_error(log: Signal<Notifications>, message: impl Into<String>) {
    let message = message.into();
    tracing::warn!("{}", message);
    notify(log, Level::Error, message);
}

/// Renders the current notifications and provides the context to `children`.
#[component]
pub fn NotificationHost(children: Element) -> Element {
    let mut log = use_context_provider(|| Signal::new(Notifications::default()));
    let entries = log().entries.clone();

    rsx! {
        {children}

        div {
            class: "notifications",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        Level::Error => "notification error",
                        Level::Success => "notification success",
                        Level::Info => "notification info",
                    },
                    onclick: move |_| log.write().entries.retain(|n| n.id != entry.id),
                    "{entry.message}"
                }
            }
        }
    }
}
