use super::*;

/// Tests deleting a comment.
///
/// Verifies that the comment is removed and the article is untouched.
///
/// Expected: Ok with comment gone
#[tokio::test]
async fn deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, article, _commenter, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    repo.delete(comment.id).await?;

    let db_comment = entity::prelude::Comment::find_by_id(comment.id).one(db).await?;
    let db_article = entity::prelude::Article::find_by_id(article.id).one(db).await?;
    assert!(db_comment.is_none());
    assert!(db_article.is_some());

    Ok(())
}
