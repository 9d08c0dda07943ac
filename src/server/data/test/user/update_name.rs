use super::*;

/// Tests renaming a user.
///
/// Verifies that only the name changes and the email and password hash are kept.
///
/// Expected: Ok with updated user
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_name(UpdateUserParams {
            id: user.id,
            name: "Renamed".to_string(),
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password);

    let db_user = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_user.name, "Renamed");

    Ok(())
}

/// Tests renaming a user that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_name(UpdateUserParams {
            id: 999,
            name: "Ghost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
