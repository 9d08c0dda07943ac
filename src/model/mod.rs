//! Data transfer objects exchanged over HTTP.
//!
//! JSON bodies serialize in camelCase. Form bodies deserialize from the field names
//! used by the rendered HTML forms.

pub mod api;
pub mod article;
pub mod comment;
pub mod user;
