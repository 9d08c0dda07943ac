use dioxus::prelude::*;

use crate::{model::user::UserDto, server::view::layout::layout};

#[derive(Props, Clone, PartialEq)]
pub struct UsersPageProps {
    pub current_user: Option<UserDto>,
    pub users: Vec<UserDto>,
}

#[allow(non_snake_case)]
pub fn UsersPage(props: UsersPageProps) -> Element {
    layout(
        "Users",
        props.current_user.as_ref(),
        rsx! {
            h1 { "Users" }
            ul {
                {props.users.iter().map(user_item)}
            }
        },
    )
}

fn user_item(user: &UserDto) -> Element {
    let href = format!("/users/{}/mypage", user.id);
    let name = user.name.clone();
    let email = user.email.clone();

    rsx! {
        li { key: "{href}",
            a { href: href, "{name}" }
            " "
            span { class: "email", "{email}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MyPageProps {
    pub current_user: Option<UserDto>,
    pub user: UserDto,
}

/// Public profile page. The edit link only shows for the profile's owner.
#[allow(non_snake_case)]
pub fn MyPage(props: MyPageProps) -> Element {
    let is_owner = props
        .current_user
        .as_ref()
        .is_some_and(|current| current.email == props.user.email);
    let edit_href = format!("/users/{}/mypage-edit", props.user.id);
    let name = props.user.name.clone();
    let email = props.user.email.clone();

    layout(
        &name,
        props.current_user.as_ref(),
        rsx! {
            h1 { "{name}" }
            p { "{email}" }
            if is_owner {
                a { href: edit_href, "Edit profile" }
            }
        },
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct MyPageEditProps {
    pub current_user: Option<UserDto>,
    pub user: UserDto,
}

/// Profile form, submitted with `PUT /users/{id}/mypage-edit` by HTTP clients.
#[allow(non_snake_case)]
pub fn MyPageEdit(props: MyPageEditProps) -> Element {
    let action = format!("/users/{}/mypage-edit", props.user.id);
    let name = props.user.name.clone();
    let email = props.user.email.clone();

    layout(
        "Edit profile",
        props.current_user.as_ref(),
        rsx! {
            h1 { "Edit profile" }
            p { "{email}" }
            form { action: action, "data-method": "put",
                label { "Name"
                    input { r#type: "text", name: "name", value: name, required: true }
                }
                button { r#type: "submit", "Save" }
            }
        },
    )
}
