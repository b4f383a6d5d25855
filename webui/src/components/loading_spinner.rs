use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into)] loading: Signal<bool>, #[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading...");
    view! {
        <Show when=move || loading.get()>
            <div class="spinner" aria-busy="true">
                <span class="spinner__dot"></span>
                <span class="spinner__label">{label}</span>
            </div>
        </Show>
    }
}
