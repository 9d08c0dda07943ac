//! SeaORM entity models for the blog database.

pub mod prelude;

pub mod article;
pub mod comment;
pub mod user;
