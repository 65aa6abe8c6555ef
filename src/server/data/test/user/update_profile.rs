use super::*;

/// Expected: Ok(Some) with new email and names, username untouched
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParams {
            id: user.id,
            email: "new@example.com".to_string(),
            first_name: "New".to_string(),
            last_name: "Name".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, user.username);
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.last_name, "Name");

    Ok(())
}

/// Expected: Ok(None) for a missing user
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParams {
            id: 42,
            email: "x@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Expected: stored hash replaced
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password_hash(user.id, "rotated".to_string())
        .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "rotated");

    Ok(())
}
