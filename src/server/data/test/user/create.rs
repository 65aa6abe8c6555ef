use super::*;
use sea_orm::SqlErr;

/// Expected: Ok with every field stored and a join timestamp set
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("ada")).await?;

    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.password_hash, "hash");

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.id, user.id);
    assert_eq!(stored.username, "ada");

    Ok(())
}

/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("ada")).await?;
    let result = repo.create(create_params("ada")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
