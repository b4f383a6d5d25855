use leptos::prelude::*;
use leptos_router::components::A;
use models::User;

use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}.", user.username),
        None => "Welcome to AlChats.".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="home">
            <h1>"AlChats"</h1>
            <p class="home__greeting">{move || greeting(auth.get().user.as_ref())}</p>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| view! { <A href="/login">"Pick a username to get started"</A> }
            >
                <A href="/users">"Find someone to chat with"</A>
            </Show>
        </section>
    }
}
