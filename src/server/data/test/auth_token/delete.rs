use super::*;

/// Expected: Ok(true) once, then Ok(false) and the token no longer resolves
#[tokio::test]
async fn deletes_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = AuthTokenRepository::new(db);
    let token = repo.create(user.id, "a".repeat(40)).await?;

    assert!(repo.delete(&token).await?);
    assert!(!repo.delete(&token).await?);
    assert_eq!(repo.find_user_id(&token).await?, None);

    Ok(())
}
