use dioxus::prelude::*;

use crate::server::view::layout::layout;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorPageProps {
    pub status: u16,
    pub message: String,
}

/// Shown when a page request fails, such as a missing article or user.
#[allow(non_snake_case)]
pub fn ErrorPage(props: ErrorPageProps) -> Element {
    let heading = props.status.to_string();
    let message = props.message;

    layout(
        &heading,
        None,
        rsx! {
            h1 { "{heading}" }
            p { "{message}" }
            a { href: "/", "Back to home" }
        },
    )
}
