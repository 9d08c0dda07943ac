use super::*;

/// Tests deleting an article.
///
/// Verifies that the article and its comments are removed.
///
/// Expected: Ok with article and comments gone
#[tokio::test]
async fn deletes_article_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, article, _commenter, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    repo.delete(article.id).await?;

    let db_article = entity::prelude::Article::find_by_id(article.id).one(db).await?;
    let db_comment = entity::prelude::Comment::find_by_id(comment.id).one(db).await?;
    assert!(db_article.is_none());
    assert!(db_comment.is_none());

    Ok(())
}
