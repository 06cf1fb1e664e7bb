use std::rc::Rc;

use chat_types::{Message, Role, TraceStep};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::api::HttpBackend;
use crate::conversation::ChatController;
use crate::interop::scroll_into_view_by_id;
use crate::styles::CHAT_STYLES;
use crate::trace_log::{present, TraceToggle};

const MESSAGES_END_ID: &str = "chat-messages-end";

#[component]
pub fn ChatView() -> Element {
    let mut controller = use_signal(ChatController::new);
    let backend = use_hook(|| Rc::new(HttpBackend::default()));
    // Only notifies when the transcript itself changes, not on every keystroke.
    let conversation = use_memo(move || controller.read().conversation().clone());

    // Scroll to bottom when messages change
    use_effect(move || {
        let _ = conversation.read().len();
        scroll_into_view_by_id(MESSAGES_END_ID);
    });

    let send_message = use_callback(move |_: ()| {
        let Some(submission) = controller.write().submit_input() else {
            return;
        };

        let backend = backend.clone();
        spawn(async move {
            let completion = submission.dispatch(backend.as_ref()).await;
            controller.write().complete(completion);
        });
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send_message.call(());
        }
    });

    let onclick = use_callback(move |_| {
        send_message.call(());
    });

    let oninput = use_callback(move |e: FormEvent| {
        controller.write().set_input(e.value());
    });

    let messages = conversation();
    let loading = controller.read().is_loading();
    let can_submit = controller.read().can_submit();
    let input_text = controller.read().input().to_string();

    rsx! {
        style { {CHAT_STYLES} }

        div {
            class: "chat-container",

            div {
                class: "chat-header",
                div {
                    class: "chat-title",
                    span { class: "chat-icon", "🧬" }
                    span { "Research Assistant" }
                }
                div {
                    class: "chat-status",
                    span { class: if loading { "status-dot busy" } else { "status-dot" }, "●" }
                    span { if loading { "Thinking" } else { "Ready" } }
                }
            }

            // Messages - scrollable area
            div {
                class: "messages-scroll-area",
                div {
                    class: "messages-list",
                    if messages.is_empty() {
                        div {
                            class: "empty-state",
                            div { class: "empty-icon", "💬" }
                            p { "Ask a question" }
                            span { "Answers come with the steps the agent took to reach them" }
                        }
                    } else {
                        for msg in messages.messages().iter() {
                            MessageBubble { key: "{msg.id}", message: msg.clone() }
                        }
                    }
                    div { id: MESSAGES_END_ID }
                }
            }

            // Input area
            div {
                class: "chat-input-area",
                div {
                    class: "input-wrapper",
                    textarea {
                        class: "chat-textarea",
                        placeholder: "Ask a question...",
                        value: "{input_text}",
                        rows: "1",
                        disabled: loading,
                        oninput,
                        onkeydown,
                    }
                    button {
                        class: "send-button",
                        disabled: !can_submit,
                        onclick,
                        if loading {
                            div {
                                class: "spinner",
                                span { "◐" }
                            }
                        } else {
                            span { "➤" }
                        }
                    }
                }
                div {
                    class: "input-hint",
                    "Press Enter to send, Shift+Enter for new line"
                }
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let is_user = message.role == Role::User;
    let sender_name = if is_user { "You" } else { "Assistant" };
    let sender_initial = if is_user { "Y" } else { "A" };
    let steps = message.logs.clone().unwrap_or_default();

    rsx! {
        div {
            class: if is_user { "message-row user-row" } else { "message-row assistant-row" },

            div {
                class: if is_user { "avatar user-avatar" } else { "avatar assistant-avatar" },
                "{sender_initial}"
            }

            div {
                class: "message-content",

                div {
                    class: "message-header",
                    span { class: "sender-name", "{sender_name}" }
                    span { class: "message-time", "{format_timestamp(message.timestamp)}" }
                    if message.pending {
                        span { class: "pending-badge", "thinking..." }
                    }
                }

                if message.pending {
                    TypingIndicator {}
                } else {
                    div {
                        class: if is_user { "message-bubble user-bubble" } else { "message-bubble assistant-bubble" },
                        "{message.content}"
                    }
                    if !is_user {
                        TraceLog { steps }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "typing-indicator",
            span {}
            span {}
            span {}
        }
    }
}

/// Collapsible execution trace under an assistant reply. Renders nothing for
/// an empty trace.
#[component]
pub fn TraceLog(steps: Vec<TraceStep>) -> Element {
    let mut trace_toggle = use_signal(TraceToggle::default);

    let Some(presentation) = present(Some(steps.as_slice())) else {
        return rsx! {};
    };

    let state = trace_toggle();
    let label = presentation.label(state.is_expanded());

    rsx! {
        div {
            class: "trace-details",
            div {
                class: "trace-header",
                button {
                    class: "trace-toggle",
                    onclick: move |_| trace_toggle.write().toggle(),
                    "{label}"
                }
                if state.is_expanded() {
                    button {
                        class: "trace-action-button",
                        onclick: move |_| trace_toggle.write().toggle_raw(),
                        if state.shows_raw() {
                            "Show fields"
                        } else {
                            "Show raw"
                        }
                    }
                }
            }
            if state.is_expanded() {
                ol {
                    class: "trace-steps",
                    for block in presentation.blocks.iter() {
                        li {
                            key: "{block.index}",
                            class: "trace-step",
                            div { class: "trace-step-title", "{block.title}" }
                            if state.shows_raw() {
                                pre { class: "trace-pre", "{block.raw}" }
                            } else {
                                for field in block.fields.iter() {
                                    div {
                                        class: "trace-field",
                                        span { class: "trace-key", "{field.key}" }
                                        if field.block {
                                            pre { class: "trace-pre", "{field.value}" }
                                        } else {
                                            span { class: "trace-value", "{field.value}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}
