use super::*;

/// Tests creating a comment.
///
/// Verifies that the comment is stored against the article and returned with the
/// commenter loaded.
///
/// Expected: Ok with comment and commenter
#[tokio::test]
async fn creates_comment_with_commenter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, article) = factory::helpers::create_article_with_author(db).await?;
    let commenter = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            article_id: article.id,
            commenter_id: commenter.id,
            contents: "Nice post".to_string(),
        })
        .await?;

    assert!(comment.id > 0);
    assert_eq!(comment.article_id, article.id);
    assert_eq!(comment.contents, "Nice post");
    assert_eq!(comment.commenter.id, commenter.id);

    Ok(())
}

/// Tests creating a comment on an article that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let commenter = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParams {
            article_id: 999,
            commenter_id: commenter.id,
            contents: "Hello?".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
