use super::*;

/// Expected: Ok(Some) for an existing username
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("grace")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("grace").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.username_exists("grace").await?);

    Ok(())
}

/// Expected: Ok(None) and no match on a different case
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("grace")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("nobody").await?.is_none());
    assert!(!repo.username_exists("nobody").await?);

    Ok(())
}
