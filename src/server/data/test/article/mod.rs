use crate::server::{
    data::article::ArticleRepository,
    model::article::{CreateArticleParams, UpdateArticleParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;
