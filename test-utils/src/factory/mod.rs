//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, so foreign keys must point at rows that already exist.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let article = factory::article::create_article(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (author, article, commenter, comment) =
//!         factory::helpers::create_comment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("someone@example.com")
//!     .password("correct horse")
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use article::create_article;
pub use comment::create_comment;
pub use user::{create_user, DEFAULT_PASSWORD};
