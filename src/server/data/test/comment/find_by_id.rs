use super::*;

/// Tests fetching a comment by ID.
///
/// Expected: Ok(Some) with commenter loaded
#[tokio::test]
async fn finds_comment_with_commenter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, article, commenter, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let found = repo.find_by_id(comment.id).await?.unwrap();

    assert_eq!(found.id, comment.id);
    assert_eq!(found.article_id, article.id);
    assert_eq!(found.commenter.id, commenter.id);

    Ok(())
}

/// Tests fetching a comment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
