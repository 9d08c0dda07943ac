use super::*;

/// Tests creating an article.
///
/// Verifies that the repository stores the article and returns it with its author
/// loaded.
///
/// Expected: Ok with article and author
#[tokio::test]
async fn creates_article_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(CreateArticleParams {
            author_id: author.id,
            title: "First post".to_string(),
            cover_url: "https://example.com/cover.png".to_string(),
            contents: "Hello world".to_string(),
        })
        .await?;

    assert!(article.id > 0);
    assert_eq!(article.title, "First post");
    assert_eq!(article.cover_url, "https://example.com/cover.png");
    assert_eq!(article.contents, "Hello world");
    assert_eq!(article.author.id, author.id);
    assert_eq!(article.author.email, author.email);

    Ok(())
}

/// Tests creating an article for an author that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let result = repo
        .create(CreateArticleParams {
            author_id: 999,
            title: "Orphan".to_string(),
            cover_url: String::new(),
            contents: "No author".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
