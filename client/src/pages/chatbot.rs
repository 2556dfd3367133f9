//! Trend assistant chat.

use leptos::prelude::*;

use crate::components::require_auth::{RequireAuth, use_allowed_token};
use crate::net::api;
use crate::state::chat::ChatLog;
use crate::util::markdown;

#[component]
pub fn ChatbotPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Chat/>
        </RequireAuth>
    }
}

#[component]
fn Chat() -> impl IntoView {
    let token = use_allowed_token();

    let chat = RwSignal::new(ChatLog::default());
    let input = RwSignal::new(String::new());
    let container = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let Some(current) = token.0.get() else {
            return;
        };
        chat.set(ChatLog::default());
        leptos::task::spawn_local(async move {
            match api::fetch_chat_history(&current).await {
                Ok(history) if token.is_current(&current) => {
                    chat.update(|l| {
                        let search = l.search;
                        *l = ChatLog::from_history(history);
                        l.search = search;
                    });
                }
                Ok(_) => {}
                Err(e) => log::warn!("chat: history unavailable: {e}"),
            }
        });
    });

    // Keep the newest exchange in view.
    Effect::new(move || {
        chat.track();
        if let Some(el) = container.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let send = move || {
        let Some(question) = chat.try_update(|l| l.ask(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());
        let search = chat.with_untracked(|l| l.search);
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            let answer = api::ask_assistant(&current, &question, search).await.map_err(|e| e.to_string());
            chat.update(|l| l.resolve(answer));
        });
    };

    view! {
        <section class="page chat-page">
            <h1>"AI Trend Shopper"</h1>
            <div class="chat-page__history" node_ref=container>
                <For
                    each=move || chat.with(|l| l.entries.iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(i, entry)| (*i, entry.response.is_some())
                    children=move |(_, entry)| {
                        view! {
                            <div class="chat-page__exchange">
                                <p class="chat-page__question">{entry.question}</p>
                                {match entry.response {
                                    Some(answer) => {
                                        view! { <div class="chat-page__answer markdown" inner_html=markdown::to_html(&answer)></div> }
                                            .into_any()
                                    }
                                    None => view! { <p class="chat-page__pending">"Thinking..."</p> }.into_any(),
                                }}
                            </div>
                        }
                    }
                />
            </div>
            <form
                class="chat-page__composer"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    send();
                }
            >
                <textarea
                    placeholder="Ask about trends, fabrics or outfits..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                ></textarea>
                <label class="chat-page__search">
                    <input
                        type="checkbox"
                        prop:checked=move || chat.with(|l| l.search)
                        on:change=move |ev| chat.update(|l| l.search = event_target_checked(&ev))
                    />
                    "Search the web"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || chat.with(ChatLog::is_waiting)>
                    "Send"
                </button>
            </form>
        </section>
    }
}
