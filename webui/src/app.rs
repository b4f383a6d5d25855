//! Root component: session context, router, navigation, and page routes.
//!
//! One `<Route>` per explicit entry of `models::route`, declared in table
//! order; the server's history fallback consults the same table, so a deep
//! link gets the same page from either side.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::hooks::use_location;
use models::route::resolve;
use models::{Page, RouteTable};

use crate::pages::about::AboutPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::users::UserListPage;
use crate::state::auth::AuthState;
use crate::state::persist;

/// Pages with their own `<Route>`, in route table order. Also the nav bar.
pub const ROUTED_PAGES: [Page; 4] = [Page::Home, Page::About, Page::UserList, Page::Login];

/// Route segment for `page` as declared in the standard table; empty for `/`.
pub fn segment(page: Page) -> &'static str {
    RouteTable::standard().path_for(page).map_or("", |path| path.trim_start_matches('/'))
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restored(persist::load_user()));
    provide_context(auth);

    view! {
        <Router>
            <DocumentTitle/>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <RouteFallback/> }>
                    <Route path=StaticSegment(segment(Page::Home)) view=HomePage/>
                    <Route path=StaticSegment(segment(Page::About)) view=AboutPage/>
                    <Route path=StaticSegment(segment(Page::UserList)) view=UserListPage/>
                    <Route path=StaticSegment(segment(Page::Login)) view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// `(href, label)` pairs for the navigation bar.
pub fn nav_links(table: RouteTable<'_>) -> Vec<(&'static str, &'static str)> {
    ROUTED_PAGES.iter().filter_map(|&page| table.path_for(page).map(|href| (href, page.title()))).collect()
}

#[component]
fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        persist::save_user(None);
        auth.update(AuthState::sign_out);
    };

    view! {
        <nav class="nav">
            <span class="nav__brand">"AlChats"</span>
            {nav_links(RouteTable::standard())
                .into_iter()
                .map(|(href, label)| view! { <A href=href>{label}</A> })
                .collect_view()}
            <span class="nav__spacer"></span>
            <span class="nav__user">{move || auth.get().display_name()}</span>
            <Show when=move || auth.get().is_signed_in()>
                <button class="btn btn--ghost" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}

/// Fallback for paths no `<Route>` claims.
///
/// The shared table is also case-insensitive and percent-decodes, so a path
/// like `/About` still reaches its page here instead of not-found.
#[component]
fn RouteFallback() -> impl IntoView {
    let location = use_location();

    move || {
        let path = location.pathname.get();
        render_page(resolve(&path).page(), path)
    }
}

#[component]
fn DocumentTitle() -> impl IntoView {
    let location = use_location();
    view! { <Title text=move || resolve(&location.pathname.get()).page().title()/> }
}

fn render_page(page: Page, path: String) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::UserList => view! { <UserListPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage path=path/> }.into_any(),
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
