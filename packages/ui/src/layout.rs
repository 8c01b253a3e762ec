//! Application shell.
//!
//! Classifies the viewport, listens for global shortcuts and places the
//! sidebar (wide) or the bottom navigation (narrow) around the routed view.

use dioxus::prelude::*;
use store::clock::now_ms;
use store::shortcuts::{dispatch_global, global_shortcuts};
use store::{HelpPanel, KeyChord, ShortcutAction, Viewport};

use crate::app_config::use_app_config;
use crate::mobile_nav::MobileNav;
use crate::navigation::use_navigation;
use crate::notes_data::NotesVersion;
use crate::notifications::{notify_for, use_notifications, Level};
use crate::sidebar::AppSidebar;
use crate::timer::sleep;

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

/// Current viewport class, provided by [`AppLayout`].
pub fn use_viewport() -> Memo<Viewport> {
    use_context::<Memo<Viewport>>()
}

#[component]
pub fn AppLayout(
    /// Path of the active route, used for highlighting.
    current_path: String,
    children: Element,
) -> Element {
    let config = use_app_config();
    let nav = use_navigation();
    let notifications = use_notifications();
    use_context_provider(NotesVersion::new);

    let mut width = use_signal(|| Option::<u32>::None);
    let viewport = use_memo(move || match width() {
        Some(px) => Viewport::from_width(px, config().layout.narrow_breakpoint_px),
        None => Viewport::Wide,
    });
    use_context_provider(|| viewport);

    let mut help = use_signal(HelpPanel::default);
    use_effect(move || {
        let duration = config().help_panel_duration();
        if help.peek().duration() != duration {
            help.set(HelpPanel::new(duration));
        }
    });

    use_future(move || async move {
        let mut eval = document::eval(
            r#"dioxus.send(window.innerWidth);
            window.addEventListener('resize', function() { dioxus.send(window.innerWidth); });"#,
        );
        while let Ok(px) = eval.recv::<u32>().await {
            width.set(Some(px));
        }
    });

    use_future(move || async move {
        let keys: Vec<&str> = global_shortcuts().iter().map(|s| s.key).collect();
        let js = format!(
            r#"const keys = {keys:?};
            document.addEventListener('keydown', function(e) {{
                if (!(e.ctrlKey || e.metaKey)) return;
                if (!keys.includes(e.key.toLowerCase())) return;
                e.preventDefault();
                dioxus.send({{ key: e.key, ctrl: e.ctrlKey, meta: e.metaKey }});
            }});"#
        );
        let mut eval = document::eval(&js);
        while let Ok(chord) = eval.recv::<KeyChord>().await {
            let Some(shortcut) = dispatch_global(&chord) else {
                continue;
            };
            match &shortcut.action {
                ShortcutAction::Navigate(target) => {
                    nav.go(target.clone());
                    notify_for(
                        notifications,
                        Level::Info,
                        format!("Navigated to {}", shortcut.label),
                        std::time::Duration::from_millis(1500),
                    );
                }
                ShortcutAction::ToggleHelp => {
                    help.write().toggle(now_ms());
                    let duration = help.peek().duration();
                    spawn(async move {
                        sleep(duration).await;
                        if !help.peek().is_visible(now_ms()) {
                            help.write().hide();
                        }
                    });
                }
            }
        }
    });

    let narrow = viewport().is_narrow();
    let show_help = help().is_visible(now_ms());

    rsx! {
        document::Stylesheet { href: LAYOUT_CSS }

        div {
            class: if narrow { "app-shell narrow" } else { "app-shell" },
            if !narrow {
                AppSidebar { current_path: current_path.clone() }
            }
            main {
                class: "app-main",
                {children}
            }
            if narrow {
                MobileNav { current_path: current_path.clone() }
            }
            if show_help {
                ShortcutHelp { on_close: move |_| help.write().hide() }
            }
        }
    }
}

#[component]
fn ShortcutHelp(on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "shortcut-help",
            onclick: move |_| on_close.call(()),
            h3 { "Keyboard shortcuts" }
            ul {
                for shortcut in global_shortcuts() {
                    li {
                        key: "{shortcut.key}",
                        kbd { "Ctrl/Cmd + {shortcut.key.to_uppercase()}" }
                        span { "{shortcut.label}" }
                    }
                }
            }
        }
    }
}
