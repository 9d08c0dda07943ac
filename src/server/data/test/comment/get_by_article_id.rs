use super::*;

/// Tests listing the comments of an article.
///
/// Verifies that only comments of the requested article are returned, oldest first.
///
/// Expected: Ok with the article's comments in creation order
#[tokio::test]
async fn returns_article_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let other_article = factory::create_article(db, author.id).await?;
    let commenter = factory::create_user(db).await?;
    let now = Utc::now();

    let second = factory::comment::CommentFactory::new(db, article.id, commenter.id)
        .created_date(now)
        .build()
        .await?;
    let first = factory::comment::CommentFactory::new(db, article.id, commenter.id)
        .created_date(now - Duration::minutes(5))
        .build()
        .await?;
    factory::create_comment(db, other_article.id, commenter.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_article_id(article.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing comments of an article without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, article) = factory::helpers::create_article_with_author(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.get_by_article_id(article.id).await?.is_empty());

    Ok(())
}
