use super::*;

/// Tests replacing a comment's contents.
///
/// Expected: Ok with new contents and unchanged commenter
#[tokio::test]
async fn updates_contents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _article, commenter, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update_contents(comment.id, "Edited".to_string())
        .await?;

    assert_eq!(updated.contents, "Edited");
    assert_eq!(updated.commenter.id, commenter.id);

    let db_comment = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_comment.contents, "Edited");

    Ok(())
}

/// Tests updating a comment that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo.update_contents(999, "Edited".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
