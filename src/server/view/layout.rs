use dioxus::prelude::*;

use crate::model::user::UserDto;

/// Wraps page content in the shared `head` and a `body` with the navigation bar.
///
/// The enclosing `<html>` element is written by `view::render`.
pub fn layout(title: &str, current_user: Option<&UserDto>, content: Element) -> Element {
    let document_title = format!("{} | myblog", title);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{document_title}" }
        }
        body {
            {navigation(current_user)}
            main { {content} }
        }
    }
}

fn navigation(current_user: Option<&UserDto>) -> Element {
    match current_user {
        Some(user) => {
            let mypage = format!("/users/{}/mypage", user.id);
            let name = user.name.clone();

            rsx! {
                nav {
                    a { href: "/", "myblog" }
                    a { href: "/users", "Users" }
                    a { href: "/articles/edit", "Write" }
                    a { href: mypage, "{name}" }
                    a { href: "/logout", "Log out" }
                }
            }
        }
        None => rsx! {
            nav {
                a { href: "/", "myblog" }
                a { href: "/users", "Users" }
                a { href: "/login", "Log in" }
                a { href: "/signup", "Sign up" }
            }
        },
    }
}

/// Short human readable date used next to articles and comments.
pub fn format_date(date: &chrono::DateTime<chrono::Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}
