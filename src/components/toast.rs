//! Toast Component
//!
//! Renders the active notification in a fixed corner overlay.

use leptos::prelude::*;

use crate::context::AppContext;

/// Host for the single active toast
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast.get().map(|toast| view! {
            <div class=toast.kind.css_class()>
                <span class="toast-message">{toast.message}</span>
                <button class="toast-dismiss" on:click=move |_| ctx.dismiss_toast()>
                    "×"
                </button>
            </div>
        })}
    }
}
