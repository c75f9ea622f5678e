//! Scrollable list of chat bubbles.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::chat::{ChatState, Sender};
use crate::util::style::{bubble_style, message_list_style};

/// Message history with a typing indicator while a reply is pending.
///
/// Scrolls to the newest message whenever the list grows.
#[component]
pub fn MessageList() -> impl IntoView {
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let messages = Memo::new(move |_| chat.with(|c| c.messages.clone()));
    let loading = Memo::new(move |_| chat.with(|c| c.loading));
    let anchor = Memo::new(move |_| chat.with(ChatState::scroll_anchor));

    Effect::new(move || {
        anchor.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div
            class="chat-widget__messages"
            node_ref=messages_ref
            style=config.with_value(message_list_style)
        >
            {move || {
                messages.with(|msgs| {
                    msgs.iter()
                        .map(|msg| {
                            let is_user = msg.sender == Sender::User;
                            let style = config.with_value(|cfg| bubble_style(cfg, msg.sender));
                            let text = msg.text.clone();
                            view! {
                                <div
                                    class="chat-widget__message"
                                    class:chat-widget__message--user=is_user
                                    style=style
                                >
                                    {text}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
            {move || {
                loading
                    .get()
                    .then(|| view! { <div class="chat-widget__loading">"..."</div> })
            }}
        </div>
    }
}
