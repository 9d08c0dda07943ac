use super::*;

/// Tests listing articles.
///
/// Verifies that articles come back newest first regardless of insertion order.
///
/// Expected: Ok with articles ordered by created date descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();

    let old = factory::article::ArticleFactory::new(db, author.id)
        .created_date(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::article::ArticleFactory::new(db, author.id)
        .created_date(now)
        .build()
        .await?;
    let middle = factory::article::ArticleFactory::new(db, author.id)
        .created_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.get_all().await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, old.id]);
    assert!(articles.iter().all(|a| a.author.id == author.id));

    Ok(())
}

/// Tests listing articles when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
