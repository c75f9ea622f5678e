//! Root chat widget component and the actions its children trigger.

use leptos::prelude::*;

use crate::components::input_row::InputRow;
use crate::components::launcher::Launcher;
use crate::components::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::net::api::{BrowserTransport, ChatTransport};
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::visibility::{Transition, VisibilityState};
#[cfg(feature = "hydrate")]
use crate::util::animation;
use crate::util::history::{CookieStore, load_history, save_history};
use crate::util::style::window_style;

/// Embeddable chat widget: launcher button plus animated chat window.
///
/// History is restored from the `chatMessages` cookie after the first
/// render; every send and clear writes it back.
#[component]
pub fn ChatWidget(#[prop(optional)] config: WidgetConfig) -> impl IntoView {
    let (initial, mount_transition) = VisibilityState::mounted(config.show);
    let config = StoredValue::new(config);
    let visibility = RwSignal::new(initial);
    let chat = RwSignal::new(ChatState::default());

    provide_context(config);
    provide_context(visibility);
    provide_context(chat);

    // Deferred load: runs once in the browser after hydration.
    Effect::new(move || {
        let history = load_history(&CookieStore);
        config.with_value(|cfg| chat.update(|c| c.load(history, cfg)));
        if let Some(transition) = mount_transition {
            settle_after(visibility, transition);
        }
    });

    on_cleanup(move || {
        if let Some(transition) = visibility.try_update(VisibilityState::close) {
            settle_after(visibility, transition);
        }
    });

    let on_clear = move |_| clear_chat(chat, config);
    let on_close = move |_| toggle_chat(visibility);

    view! {
        <div class="chat-widget">
            <Launcher/>
            <div
                id="chatBot"
                class="chat-widget__window"
                class:chat-widget__window--open=move || visibility.with(VisibilityState::is_shown)
                style=move || config.with_value(|cfg| visibility.with(|v| window_style(cfg, v)))
            >
                <div class="chat-widget__header">
                    <button class="chat-widget__clear" on:click=on_clear>
                        "Clear"
                    </button>
                    <button class="chat-widget__close" on:click=on_close>
                        "\u{00d7}"
                    </button>
                </div>
                <MessageList/>
                {move || {
                    chat.with(|c| c.error.clone())
                        .map(|error| view! { <div class="chat-widget__error">{error}</div> })
                }}
                <InputRow/>
            </div>
        </div>
    }
}

/// Open the window when closed, close it when open.
pub(crate) fn toggle_chat(visibility: RwSignal<VisibilityState>) {
    if let Some(transition) = visibility.try_update(VisibilityState::toggle) {
        settle_after(visibility, transition);
    }
}

/// Settle `transition` once its animation has run, unless superseded.
///
/// Off the browser nothing animates and the transition settles at once.
fn settle_after(visibility: RwSignal<VisibilityState>, transition: Transition) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        animation::completed(transition.duration).await;
        visibility.try_update(|v| v.settle(transition.generation));
    });
    #[cfg(not(feature = "hydrate"))]
    visibility.try_update(|v| v.settle(transition.generation));
}

/// Send the pending input as one user turn, emptying the field on accept.
pub(crate) fn send_message(
    chat: RwSignal<ChatState>,
    config: StoredValue<WidgetConfig>,
    input: RwSignal<String>,
) {
    let cfg = config.get_value();
    let text = input.get_untracked();
    let Some(request) = chat.try_update(|c| c.begin_send(&text, &cfg)).flatten() else {
        return;
    };
    input.set(String::new());
    leptos::task::spawn_local(async move {
        let outcome = BrowserTransport.post(&cfg.ai_url, &request).await;
        if let Err(e) = &outcome {
            log::warn!("chat request to {} failed: {e}", cfg.ai_url);
        }
        chat.try_update(|c| {
            c.finish_send(outcome, &cfg);
            persist(&c.messages);
        });
    });
}

/// Reset the conversation to the greeting.
pub(crate) fn clear_chat(chat: RwSignal<ChatState>, config: StoredValue<WidgetConfig>) {
    config.with_value(|cfg| {
        chat.update(|c| {
            c.clear(cfg);
            persist(&c.messages);
        });
    });
}

fn persist(messages: &[ChatMessage]) {
    if let Err(e) = save_history(&CookieStore, messages) {
        log::warn!("failed to persist chat history: {e}");
    }
}
