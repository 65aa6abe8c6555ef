use super::*;
use sea_orm::SqlErr;

/// Expected: Ok with the author loaded alongside the review
#[tokio::test]
async fn creates_review_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            property_id: property.id,
            user_id: guest.id,
            rating: 4,
            comment: "Lovely stay".to_string(),
        })
        .await?;

    assert_eq!(review.property_id, property.id);
    assert_eq!(review.user.id, guest.id);
    assert_eq!(review.user.username, guest.username);
    assert_eq!(review.rating, 4);
    assert!(repo.exists_for_user(property.id, guest.id).await?);

    Ok(())
}

/// Expected: Err with a unique violation on a second review of the same property
#[tokio::test]
async fn rejects_second_review_by_same_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    factory::review::create_review(db, property.id, guest.id, 5).await?;

    let err = ReviewRepository::new(db)
        .create(CreateReviewParams {
            property_id: property.id,
            user_id: guest.id,
            rating: 1,
            comment: String::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
