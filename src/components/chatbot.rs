//! AI symptom helper chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside a dialog on the landing page. Sends prompts to
//! `POST /api/chat` and renders the exchange; the assistant backend itself
//! is an external collaborator.

use leptos::prelude::*;

use crate::components::loading::InlineSpinner;
use crate::net;
use crate::state::chat::{ChatMessage, ChatState};

/// Chat panel showing conversation history and a prompt input.
#[component]
pub fn ChatbotPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view as the history grows.
    Effect::new(move || {
        let _ = chat.get().messages.len();
        if let Some(el) = messages_ref.get() {
            let scroll_height = el.scroll_height();
            el.set_scroll_top(scroll_height);
        }
    });

    let do_send = move || {
        let text = input.get();
        let trimmed = text.trim();
        if trimmed.is_empty() || chat.get().busy {
            return;
        }
        let prompt = trimmed.to_owned();
        chat.update(|c| {
            c.messages.push(ChatMessage::user(prompt.clone()));
            c.busy = true;
            c.error = None;
        });
        input.set(String::new());

        leptos::task::spawn_local(async move {
            match net::api::send_chat_message(&prompt).await {
                Ok(reply) => chat.update(|c| {
                    c.messages.push(ChatMessage::assistant(reply));
                    c.busy = false;
                }),
                Err(e) => chat.update(|c| {
                    c.error = Some(e);
                    c.busy = false;
                }),
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chatbot">
            <div class="chatbot__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chatbot__empty">
                                "Describe your symptoms and the assistant will try to help."
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            let is_assistant = msg.role == "assistant";
                            view! {
                                <div
                                    class="chatbot__message"
                                    class:chatbot__message--assistant=is_assistant
                                >
                                    {content}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            {move || {
                chat.get().busy.then(|| {
                    view! {
                        <div class="chatbot__busy">
                            <InlineSpinner/>
                            "Thinking..."
                        </div>
                    }
                })
            }}
            {move || {
                chat.get()
                    .error
                    .map(|e| view! { <div class="chatbot__error">{e}</div> })
            }}

            <div class="chatbot__input-row">
                <input
                    class="chatbot__input"
                    type="text"
                    placeholder="Describe your symptoms..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=on_click disabled=move || chat.get().busy>
                    "Send"
                </button>
            </div>
            <p class="chatbot__disclaimer">
                "The assistant offers general guidance only. Always consult a doctor for medical advice."
            </p>
        </div>
    }
}
