//! Username sign-in, plus renaming once signed in.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use models::user::normalize_username;

use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

fn validate_username_input(raw: &str) -> Result<String, &'static str> {
    normalize_username(raw).map(str::to_owned).map_err(|_| "Enter a username first.")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let new_username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name = match validate_username_input(&username.get()) {
            Ok(name) => name,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&name).await {
                    Ok(user) => {
                        crate::state::persist::save_user(Some(&user));
                        auth.update(|a| a.sign_in(user));
                        busy.set(false);
                        navigate("/users", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Sign in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, &navigate);
        }
    };

    let on_rename = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(user_id) = auth.get().user_id().map(str::to_owned) else {
            return;
        };
        let name = match validate_username_input(&new_username.get()) {
            Ok(name) => name,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_username(&user_id, &name).await {
                Ok(user) => {
                    info.set(format!("You are now {}.", user.username));
                    crate::state::persist::save_user(Some(&user));
                    auth.update(|a| a.sign_in(user));
                    new_username.set(String::new());
                }
                Err(e) => info.set(format!("Rename failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, name);
        }
    };

    view! {
        <section class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"New names are registered on first use."</p>
                <form class="login-form" on:submit=on_sign_in>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        "Continue"
                    </button>
                </form>
                <Show when=move || auth.get().is_signed_in()>
                    <div class="login-divider"></div>
                    <p class="login-card__subtitle">
                        "Signed in as " <strong>{move || auth.get().display_name()}</strong>
                    </p>
                    <form class="login-form" on:submit=on_rename>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="new username"
                            prop:value=move || new_username.get()
                            on:input=move |ev| new_username.set(event_target_value(&ev))
                        />
                        <button class="btn btn--ghost" type="submit" disabled=move || busy.get()>
                            "Rename"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </section>
    }
}
