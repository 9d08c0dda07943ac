use super::*;

/// Tests fetching an article by ID.
///
/// Expected: Ok(Some) with author loaded
#[tokio::test]
async fn finds_article_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;

    let repo = ArticleRepository::new(db);
    let found = repo.find_by_id(article.id).await?.unwrap();

    assert_eq!(found.id, article.id);
    assert_eq!(found.title, article.title);
    assert_eq!(found.author.id, author.id);

    Ok(())
}

/// Tests fetching an article that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
