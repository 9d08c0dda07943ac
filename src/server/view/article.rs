use dioxus::prelude::*;

use crate::{
    model::{article::ArticleDto, comment::CommentDto, user::UserDto},
    server::view::layout::{format_date, layout},
};

#[derive(Props, Clone, PartialEq)]
pub struct IndexPageProps {
    pub current_user: Option<UserDto>,
    /// Articles, newest first.
    pub articles: Vec<ArticleDto>,
}

#[allow(non_snake_case)]
pub fn IndexPage(props: IndexPageProps) -> Element {
    let is_empty = props.articles.is_empty();

    layout(
        "Home",
        props.current_user.as_ref(),
        rsx! {
            h1 { "Articles" }
            if is_empty {
                p { "No articles yet." }
            }
            ul {
                {props.articles.iter().map(article_item)}
            }
        },
    )
}

fn article_item(article: &ArticleDto) -> Element {
    let href = format!("/articles/{}", article.id);
    let title = article.title.clone();
    let author = article.author.name.clone();
    let date = format_date(&article.created_date);

    rsx! {
        li { key: "{href}",
            a { href: href, "{title}" }
            " by {author} on {date}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ArticlePageProps {
    pub current_user: Option<UserDto>,
    pub article: ArticleDto,
    /// Comments, oldest first.
    pub comments: Vec<CommentDto>,
}

#[allow(non_snake_case)]
pub fn ArticlePage(props: ArticlePageProps) -> Element {
    let article = &props.article;
    let is_author = props
        .current_user
        .as_ref()
        .is_some_and(|current| current.email == article.author.email);
    let logged_in = props.current_user.is_some();

    let title = article.title.clone();
    let cover_url = article.cover_url.clone();
    let has_cover = !cover_url.is_empty();
    let contents = article.contents.clone();
    let author = article.author.name.clone();
    let author_href = format!("/users/{}/mypage", article.author.id);
    let date = format_date(&article.created_date);
    let edit_href = format!("/articles/{}/edit", article.id);
    let comments_action = format!("/articles/{}/comments", article.id);

    layout(
        &title,
        props.current_user.as_ref(),
        rsx! {
            article {
                h1 { "{title}" }
                p { class: "meta",
                    a { href: author_href, "{author}" }
                    " on {date}"
                }
                if has_cover {
                    img { src: cover_url, alt: "{title}" }
                }
                div { class: "contents", "{contents}" }
                if is_author {
                    a { href: edit_href, "Edit" }
                }
            }
            section { class: "comments",
                h2 { "Comments" }
                ul {
                    {props.comments.iter().map(comment_item)}
                }
                if logged_in {
                    form { method: "post", action: comments_action,
                        textarea { name: "contents", required: true }
                        button { r#type: "submit", "Comment" }
                    }
                }
            }
        },
    )
}

fn comment_item(comment: &CommentDto) -> Element {
    let key = comment.id.to_string();
    let commenter = comment.commenter.name.clone();
    let contents = comment.contents.clone();
    let date = format_date(&comment.created_date);

    rsx! {
        li { key: "{key}",
            strong { "{commenter}" }
            " {date}"
            p { "{contents}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ArticleEditPageProps {
    pub current_user: Option<UserDto>,
    /// Article being edited, `None` when writing a new one.
    pub article: Option<ArticleDto>,
    pub message: Option<String>,
}

/// Form for writing a new article or editing an existing one.
///
/// New articles are posted to `/articles`. Edits are sent with `PUT /articles/{id}` by
/// HTTP clients.
#[allow(non_snake_case)]
pub fn ArticleEditPage(props: ArticleEditPageProps) -> Element {
    let (heading, action, method) = match &props.article {
        Some(article) => ("Edit article", format!("/articles/{}", article.id), "put"),
        None => ("New article", "/articles".to_string(), "post"),
    };
    // Browsers can only submit GET and POST forms.
    let form_method = (method == "post").then_some("post");
    let (title, cover_url, contents) = props
        .article
        .as_ref()
        .map(|a| (a.title.clone(), a.cover_url.clone(), a.contents.clone()))
        .unwrap_or_default();

    layout(
        heading,
        props.current_user.as_ref(),
        rsx! {
            h1 { "{heading}" }
            if let Some(message) = props.message {
                p { class: "error", "{message}" }
            }
            form { method: form_method, action: action, "data-method": method,
                label { "Title"
                    input { r#type: "text", name: "title", value: title, required: true }
                }
                label { "Cover image URL"
                    input { r#type: "url", name: "coverUrl", value: cover_url }
                }
                label { "Contents"
                    textarea { name: "contents", rows: "12", required: true, "{contents}" }
                }
                button { r#type: "submit", "Save" }
            }
        },
    )
}
