//! Directory of registered users with a one-click "Start chat".

use leptos::prelude::*;
use models::{ConversationRequest, User};

use crate::components::error_msg::ErrorMsg;
use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

/// Direct conversation between the signed-in user and `other`.
fn chat_request(auth: &AuthState, other: &User) -> Result<ConversationRequest, String> {
    let Some(me) = auth.user_id() else {
        return Err("Sign in to start a chat.".to_owned());
    };
    let request = ConversationRequest::direct(me, other.user_id.clone());
    request.validate().map_err(|e| e.to_string())?;
    Ok(request)
}

#[component]
pub fn UserListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users().await {
            Ok(list) => users.set(list),
            Err(e) => error.set(format!("Could not load users: {e}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    loading.set(false);

    let start_chat = Callback::new(move |other: User| {
        error.set(String::new());
        notice.set(String::new());
        let request = match chat_request(&auth.get_untracked(), &other) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg);
                return;
            }
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_conversation(&request).await {
                Ok(_) => notice.set(format!("Started a chat with {}.", other.username)),
                Err(e) => error.set(format!("Could not start chat: {e}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    });

    view! {
        <section class="users">
            <h1>"Users"</h1>
            <LoadingSpinner loading=loading/>
            <ErrorMsg message=error/>
            <Show when=move || !notice.get().is_empty()>
                <p class="notice">{move || notice.get()}</p>
            </Show>
            <ul class="user-list">
                {move || {
                    let state = auth.get();
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let is_me = state.user_id() == Some(user.user_id.as_str());
                            let can_chat = state.can_chat_with(&user);
                            view! { <UserRow user=user is_me=is_me can_chat=can_chat on_chat=start_chat/> }
                        })
                        .collect_view()
                }}
            </ul>
            <Show when=move || !loading.get() && error.get().is_empty() && users.get().is_empty()>
                <p class="users__empty">"No users yet."</p>
            </Show>
        </section>
    }
}

#[component]
fn UserRow(user: User, is_me: bool, can_chat: bool, on_chat: Callback<User>) -> impl IntoView {
    let name = if is_me { format!("{} (you)", user.username) } else { user.username.clone() };
    view! {
        <li class="user-list__item" class:user-list__item--me=is_me>
            <span class="user-list__name">{name}</span>
            {can_chat
                .then(move || {
                    view! {
                        <button class="btn" on:click=move |_| on_chat.run(user.clone())>
                            "Start chat"
                        </button>
                    }
                })}
        </li>
    }
}
