use dioxus::prelude::*;
use crate::shared::hooks::{apply_theme, save_theme, use_theme};

/// Light/dark switch shown in the navbar. Persists the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_theme();

    let toggle_theme = use_callback(move |_: ()| {
        let next = current_theme().toggled();
        current_theme.set(next);
        apply_theme(next);
        save_theme(next);
    });

    // Tooltip shows target state (what will happen on click)
    let target = current_theme().toggled();
    let tooltip = format!("Switch to {} theme", target.as_str());
    let icon = current_theme().icon();

    rsx! {
        div {
            class: "c-theme-toggle",
            title: "{tooltip}",
            role: "button",
            tabindex: "0",
            aria_label: "Toggle dark mode",
            onclick: move |_| toggle_theme.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    // Space would otherwise scroll the page
                    evt.prevent_default();
                    toggle_theme.call(());
                }
            },
            span { class: "c-theme-toggle__icon", "{icon}" }
        }
    }
}

/// Keys that activate an element with `role="button"`.
fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}
