use super::*;

/// Tests updating an article's editable fields.
///
/// Verifies that title, cover and contents change while author and creation date
/// stay the same.
///
/// Expected: Ok with updated article
#[tokio::test]
async fn updates_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update(UpdateArticleParams {
            id: article.id,
            title: "New title".to_string(),
            cover_url: "https://example.com/new.png".to_string(),
            contents: "New contents".to_string(),
        })
        .await?;

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.cover_url, "https://example.com/new.png");
    assert_eq!(updated.contents, "New contents");
    assert_eq!(updated.author.id, author.id);
    assert_eq!(updated.created_date, article.created_date);

    Ok(())
}

/// Tests updating an article that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let result = repo
        .update(UpdateArticleParams {
            id: 999,
            title: "Title".to_string(),
            cover_url: String::new(),
            contents: "Contents".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
