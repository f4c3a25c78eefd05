use crate::ai::HttpQueryBackend;
use crate::config::BotConfig;
use crate::controller::ChatController;
use crate::speech::browser::{BrowserSoundCues, BrowserSpeechProvider, speech_recognition_available};
use crate::speech::{Transcriber, UnavailableProvider};
use crate::types::{Language, Message, Sender};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;

const SCROLL_TO_END: &str =
    "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });";

#[component]
pub fn ChatView(config: BotConfig) -> Element {
    let controller = use_signal(|| {
        ChatController::new(Rc::new(HttpQueryBackend::new(config.query_endpoint.clone())))
    });
    let mut transcriber = use_signal(|| {
        let input = controller;
        let mut transcriber = Transcriber::new(
            Box::new(UnavailableProvider),
            Box::new(BrowserSoundCues::new(config.sounds_path.clone())),
            move |text| {
                let mut input = input;
                input.write().set_input(text);
            },
        );
        transcriber.set_language(config.language);
        transcriber
    });

    use_future(move || async move {
        let mut transcriber = transcriber;
        if speech_recognition_available().await {
            transcriber
                .write()
                .install_provider(Box::new(BrowserSpeechProvider::new()));
        } else {
            tracing::info!("Speech recognition not offered by this host");
        }
    });

    use_effect(move || {
        let _count = controller.read().messages().len();
        let _ = document::eval(SCROLL_TO_END);
    });

    use_drop(move || {
        if let Ok(mut transcriber) = transcriber.try_write() {
            transcriber.stop();
        }
    });

    let send_message = move |text: String| {
        let mut controller = controller;
        let Some(query) = controller.write().prepare_send(&text) else {
            return;
        };
        let backend = controller.read().backend();
        spawn(async move {
            let result = backend.query(&query).await;
            controller.write().finish_send(result);
        });
    };

    let (messages, editing, input) = {
        let state = controller.read();
        (
            state.messages().to_vec(),
            state.editing().cloned(),
            state.input().to_string(),
        )
    };
    let recording = transcriber.read().is_recording();
    let language = transcriber.read().language();
    let language_code = language.code();
    let (mic_class, mic_title) = if recording {
        ("mic-btn recording", "Stop dictation")
    } else {
        ("mic-btn", "Start dictation")
    };

    rsx! {
        div { class: "chat-page",
            SavedChatsSidebar { controller }
            div { class: "chat-window",
                div { class: "chat-header",
                    h2 { "Sandalwood Bot" }
                    select {
                        class: "language-select",
                        value: language_code,
                        onchange: move |ev| {
                            if let Some(lang) = Language::from_code(&ev.value()) {
                                transcriber.write().set_language(lang);
                            }
                        },
                        for lang in Language::ALL {
                            option { value: lang.code(), selected: lang == language, {lang.label()} }
                        }
                    }
                }
                div { id: "chat-list", class: "chat-list",
                    for (index, message) in messages.into_iter().enumerate() {
                        MessageRow {
                            key: "{index}",
                            index,
                            message,
                            is_editing: editing.as_ref().is_some_and(|d| d.index == index),
                            draft: editing.as_ref().map(|d| d.text.clone()).unwrap_or_default(),
                            controller,
                        }
                    }
                    div { id: "chat-end" }
                }
                div { class: "composer",
                    div { class: "composer-inner",
                        button {
                            class: mic_class,
                            r#type: "button",
                            title: mic_title,
                            onclick: move |_| transcriber.write().toggle(),
                            "🎤"
                        }
                        input {
                            class: "composer-input",
                            value: "{input}",
                            placeholder: "Type a message...",
                            oninput: move |ev| {
                                let mut controller = controller;
                                controller.write().set_input(ev.value());
                            },
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    let text = controller.read().input().to_string();
                                    send_message(text);
                                }
                            },
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let text = controller.read().input().to_string();
                                send_message(text);
                            },
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SavedChatsSidebar(controller: Signal<ChatController>) -> Element {
    let mut controller = controller;
    let saved: Vec<(u32, String)> = controller
        .read()
        .saved_chats()
        .map(|chat| (chat.id, chat.label()))
        .collect();

    rsx! {
        aside { class: "sidebar",
            h2 { "Saved Chats" }
            div { class: "saved-list",
                for (id, label) in saved {
                    button {
                        key: "{id}",
                        class: "saved-chat",
                        r#type: "button",
                        onclick: move |_| controller.write().select_chat(id),
                        "{label}"
                    }
                }
            }
            button {
                class: "btn btn-primary save-chat",
                r#type: "button",
                onclick: move |_| {
                    controller.write().save_chat();
                },
                "Save Chat"
            }
        }
    }
}

/// Bot text is formatter output and rendered as markup; user text is
/// always rendered as plain text.
#[component]
fn MessageRow(
    index: usize,
    message: Message,
    is_editing: bool,
    draft: String,
    controller: Signal<ChatController>,
) -> Element {
    let mut controller = controller;
    let bubble_class = match message.sender {
        Sender::User => "bubble user",
        Sender::Bot => "bubble bot",
    };

    rsx! {
        div { class: "message-row",
            if is_editing {
                div { class: "edit-box",
                    textarea {
                        rows: "2",
                        value: "{draft}",
                        oninput: move |ev| controller.write().set_edit_text(ev.value()),
                    }
                    div { class: "edit-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                controller.write().commit_edit();
                            },
                            "Update"
                        }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| controller.write().cancel_edit(),
                            "Cancel"
                        }
                    }
                }
            } else {
                {match message.sender {
                    Sender::Bot => rsx! {
                        div { class: bubble_class, dangerous_inner_html: "{message.text}" }
                    },
                    Sender::User => rsx! {
                        div { class: bubble_class, "{message.text}" }
                        button {
                            class: "edit-btn",
                            r#type: "button",
                            onclick: move |_| controller.write().begin_edit(index),
                            "Edit"
                        }
                    },
                }}
            }
        }
    }
}
