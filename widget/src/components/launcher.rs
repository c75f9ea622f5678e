//! Floating button that opens and closes the chat window.

use leptos::prelude::*;

use crate::components::chat_widget::toggle_chat;
use crate::config::WidgetConfig;
use crate::state::visibility::VisibilityState;
use crate::util::style::launcher_style;

/// Launcher button styled from the `btn_*` options.
///
/// Shows `btn_text` unless a background image replaces it.
#[component]
pub fn Launcher() -> impl IntoView {
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let visibility = expect_context::<RwSignal<VisibilityState>>();

    let style = config.with_value(launcher_style);
    let label = config.with_value(|cfg| {
        cfg.btn_background_image
            .trim()
            .is_empty()
            .then(|| cfg.btn_text.clone())
    });
    let aria_label = config.with_value(|cfg| cfg.btn_text.clone());

    view! {
        <button
            class="chat-widget__launcher"
            style=style
            aria-label=aria_label
            aria-expanded=move || visibility.with(VisibilityState::is_shown).to_string()
            on:click=move |_| toggle_chat(visibility)
        >
            {label}
        </button>
    }
}
