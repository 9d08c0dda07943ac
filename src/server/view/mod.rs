//! Server-rendered HTML pages.
//!
//! Pages are dioxus components rendered once to a string with `dioxus-ssr`. There is no
//! client-side runtime: forms submit with plain GET/POST requests.

pub mod article;
pub mod auth;
pub mod error;
pub mod layout;
pub mod user;

use axum::response::Html;
use dioxus::prelude::Element;
use dioxus_core::VirtualDom;

/// Renders a page component with its props into a complete HTML document.
pub fn render<P: Clone + 'static>(page: fn(P) -> Element, props: P) -> Html<String> {
    let mut dom = VirtualDom::new_with_props(page, props);
    dom.rebuild_in_place();

    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    ))
}
