//! Request processing shared by all handlers.
//!
//! - `session` - Typed access to the authenticated user stored in the session
//! - `auth` - `AuthGuard` resolving the session user for handlers
//! - `basic_auth` - Logs requests carrying valid Basic credentials into the session

pub mod auth;
pub mod basic_auth;
pub mod session;

#[cfg(test)]
mod test;
