use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_by_article_id;
mod update_contents;
