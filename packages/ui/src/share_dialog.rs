use std::time::Duration;

use api::Note;
use dioxus::prelude::*;
use store::share::{share_text, share_url, SharePlatform};

use crate::app_config::use_app_config;
use crate::browser::{copy_to_clipboard, open_window, page_origin};
use crate::icons::{FaCheck, FaCopy, FaXmark};
use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaLinkedin, FaTwitter};
use crate::notifications::{notify_error, use_notifications};
use crate::timer::sleep;
use crate::views::ModalOverlay;
use crate::Icon;

const COPIED_INDICATOR: Duration = Duration::from_millis(2000);

#[component]
pub fn ShareDialog(note: Note, on_close: EventHandler<()>) -> Element {
    let config = use_app_config();
    let notifications = use_notifications();
    let mut copied = use_signal(|| false);

    let id = note.id.clone();
    let link = use_resource(move || {
        let configured = config().share.origin;
        let id = id.clone();
        async move {
            let origin = match configured {
                Some(origin) => origin,
                None => page_origin().await.unwrap_or_default(),
            };
            share_url(&origin, &id)
        }
    });

    let url = link().unwrap_or_default();
    let text = share_text(&note.title);

    let copy_link = {
        let url = url.clone();
        move |_| {
            let url = url.clone();
            spawn(async move {
                match copy_to_clipboard(&url).await {
                    Ok(()) => {
                        copied.set(true);
                        sleep(COPIED_INDICATOR).await;
                        copied.set(false);
                    }
                    Err(e) => notify_error(notifications, format!("Failed to copy link: {e}")),
                }
            });
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body share-dialog",
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "Share note" }
                    button {
                        class: "btn btn-ghost",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                div {
                    class: "share-link-row",
                    input {
                        class: "input share-link",
                        readonly: true,
                        value: "{url}",
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: url.is_empty(),
                        onclick: copy_link,
                        if copied() {
                            Icon { icon: FaCheck, width: 14, height: 14 }
                            span { "Copied" }
                        } else {
                            Icon { icon: FaCopy, width: 14, height: 14 }
                            span { "Copy" }
                        }
                    }
                }
                div {
                    class: "share-platforms",
                    for platform in SharePlatform::ALL {
                        button {
                            key: "{platform.name()}",
                            class: "btn btn-outline",
                            disabled: url.is_empty(),
                            onclick: {
                                let intent = platform.intent_url(&url, &text);
                                move |_| open_window(&intent)
                            },
                            {match platform {
                                SharePlatform::Twitter => rsx! { Icon { icon: FaTwitter, width: 14, height: 14 } },
                                SharePlatform::Facebook => rsx! { Icon { icon: FaFacebook, width: 14, height: 14 } },
                                SharePlatform::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: 14, height: 14 } },
                            }}
                            span { "{platform.name()}" }
                        }
                    }
                }
            }
        }
    }
}
