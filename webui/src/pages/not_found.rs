//! Rendered for every path the route table sends to the catch-all.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <A href="/">"Back home"</A>
        </section>
    }
}
