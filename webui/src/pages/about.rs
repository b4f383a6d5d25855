use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About"</h1>
            <p>
                "AlChats is a small chat app. Pick a username, browse who else is here, "
                "and start a conversation with one click."
            </p>
            <p>"Usernames are unique; there are no passwords."</p>
        </section>
    }
}
