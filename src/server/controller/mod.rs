//! HTTP request handlers.
//!
//! Page handlers render HTML views and redirect after form submissions. JSON handlers
//! under `/api` exchange DTOs and are documented with utoipa.

pub mod article;
pub mod auth;
pub mod comment;
pub mod user;

#[cfg(test)]
mod test;
