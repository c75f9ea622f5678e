//! Text input and send button.

use leptos::prelude::*;

use crate::components::chat_widget::send_message;
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
use crate::util::style::{input_style, send_button_style};

/// Input bound to the pending message; Enter or the button submits it.
#[component]
pub fn InputRow() -> impl IntoView {
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    let on_click = move |_| send_message(chat, config, input);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_message(chat, config, input);
        }
    };

    let clearing = Memo::new(move |_| chat.with(|c| c.clearing));
    let can_send = move || !clearing.get() && input.with(|text| !text.trim().is_empty());
    let placeholder = config.with_value(|cfg| cfg.placeholder.clone());

    view! {
        <div class="chat-widget__input-row">
            <input
                class="chat-widget__input"
                type="text"
                placeholder=placeholder
                style=config.with_value(input_style)
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="chat-widget__send"
                style=config.with_value(send_button_style)
                on:click=on_click
                disabled=move || !can_send()
            >
                "Send"
            </button>
        </div>
    }
}
