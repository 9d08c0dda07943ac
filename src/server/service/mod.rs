//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (HTTP) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks and the rules around signup and login
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod article;
pub mod comment;
pub mod user;

#[cfg(test)]
mod test;
