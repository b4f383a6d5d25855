//! Inline error banner; renders nothing while the message is empty.

use leptos::prelude::*;

#[component]
pub fn ErrorMsg(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="error-msg" role="alert">
                {move || message.get()}
            </p>
        </Show>
    }
}
