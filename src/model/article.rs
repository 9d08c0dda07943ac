use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub cover_url: String,
    pub contents: String,
    pub author: UserDto,
    pub created_date: DateTime<Utc>,
}

/// Article form used for both creation and editing.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFormDto {
    pub title: String,
    #[serde(default)]
    pub cover_url: String,
    pub contents: String,
}
