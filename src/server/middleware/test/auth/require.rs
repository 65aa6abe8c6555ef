use super::*;

/// Expected: Ok(User) for the token's owner
#[tokio::test]
async fn resolves_valid_token_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::auth_token::create_token(db, user.id).await?;
    let tokens = DatabaseTokenValidator::new(db.clone());
    let headers = headers_with(&format!("Bearer {}", token.token));

    let result = AuthGuard::new(db, &tokens, &headers).require().await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.username, user.username);

    Ok(())
}

/// Expected: Err(MissingToken) without an Authorization header
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = DatabaseTokenValidator::new(db.clone());
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Expected: Err(InvalidToken) for a token nobody holds
#[tokio::test]
async fn fails_for_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = DatabaseTokenValidator::new(db.clone());
    let headers = headers_with("Bearer not-a-real-token");

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Expected: Err(UserNotInDatabase) when the token resolves to a missing user
#[tokio::test]
async fn fails_when_user_is_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = FixedTokenValidator(Some(999));
    let headers = headers_with("Bearer orphaned-token");

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}
