use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}

/// Tests that deleting a user removes their articles and comments.
///
/// Expected: Ok with dependent rows removed by cascade
#[tokio::test]
async fn cascades_to_articles_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article, _commenter, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(author.id).await?;

    let db_article = entity::prelude::Article::find_by_id(article.id).one(db).await?;
    let db_comment = entity::prelude::Comment::find_by_id(comment.id).one(db).await?;
    assert!(db_article.is_none());
    assert!(db_comment.is_none());

    Ok(())
}
