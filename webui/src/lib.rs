//! # webui
//!
//! Client-side-rendered Leptos app for AlChats.
//!
//! `mount` injects [`app::App`] into the `#app` element of the page shell.
//! Everything that needs a browser is gated behind the `csr` feature; the
//! remaining code (views, endpoint builders, state helpers) also compiles
//! natively so it can be unit tested with plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Id of the DOM element the app renders into.
pub const MOUNT_POINT_ID: &str = "app";

/// Mount [`app::App`] into `#app`, or into `<body>` when the shell lacks it.
#[cfg(feature = "csr")]
pub fn mount() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match target {
        Some(el) => {
            log::debug!("mounting into #{MOUNT_POINT_ID}");
            leptos::mount::mount_to(el, app::App).forget();
        }
        None => {
            log::warn!("#{MOUNT_POINT_ID} not found; mounting into <body>");
            leptos::mount::mount_to_body(app::App);
        }
    }
}
