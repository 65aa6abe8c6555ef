use super::*;

/// Expected: token resolves to its owner, and the owner resolves to the token
#[tokio::test]
async fn resolves_token_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::auth_token::create_token(db, user.id).await?;

    let repo = AuthTokenRepository::new(db);

    assert_eq!(repo.find_user_id(&token.token).await?, Some(user.id));
    assert_eq!(repo.find_by_user_id(user.id).await?, Some(token.token));

    Ok(())
}

/// Expected: Ok(None) for a token never issued
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthTokenRepository::new(db);

    assert_eq!(repo.find_user_id("not-a-token").await?, None);

    Ok(())
}
