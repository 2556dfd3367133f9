//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, use_toasts};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind = match toast.kind {
                        ToastKind::Info => "toast toast--info",
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=kind>
                            <strong class="toast__title">{toast.title}</strong>
                            <span class="toast__description">{toast.description}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
