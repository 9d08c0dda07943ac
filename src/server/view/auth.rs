use dioxus::prelude::*;

use crate::server::view::layout::layout;

#[derive(Props, Clone, PartialEq)]
pub struct SignupPageProps {
    /// Validation or duplicate-email message from a rejected signup.
    pub message: Option<String>,
}

#[allow(non_snake_case)]
pub fn SignupPage(props: SignupPageProps) -> Element {
    layout(
        "Sign up",
        None,
        rsx! {
            h1 { "Sign up" }
            if let Some(message) = props.message {
                p { class: "error", "{message}" }
            }
            form { method: "post", action: "/users",
                label { "Name"
                    input { r#type: "text", name: "name", required: true }
                }
                label { "Email"
                    input { r#type: "email", name: "email", required: true }
                }
                label { "Password"
                    input { r#type: "password", name: "password", required: true }
                }
                button { r#type: "submit", "Sign up" }
            }
        },
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct LoginPageProps {
    pub message: Option<String>,
}

#[allow(non_snake_case)]
pub fn LoginPage(props: LoginPageProps) -> Element {
    layout(
        "Log in",
        None,
        rsx! {
            h1 { "Log in" }
            if let Some(message) = props.message {
                p { class: "error", "{message}" }
            }
            form { method: "post", action: "/login",
                label { "Email"
                    input { r#type: "email", name: "email", required: true }
                }
                label { "Password"
                    input { r#type: "password", name: "password", required: true }
                }
                button { r#type: "submit", "Log in" }
            }
            p {
                "No account yet? "
                a { href: "/signup", "Sign up" }
            }
        },
    )
}
