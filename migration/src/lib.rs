pub use sea_orm_migration::prelude::*;

mod m20190801_000001_create_user_table;
mod m20190801_000002_create_article_table;
mod m20190801_000003_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20190801_000001_create_user_table::Migration),
            Box::new(m20190801_000002_create_article_table::Migration),
            Box::new(m20190801_000003_create_comment_table::Migration),
        ]
    }
}
