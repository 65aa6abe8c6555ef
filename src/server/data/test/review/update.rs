use super::*;

/// Expected: Ok(Some) with new rating and comment
#[tokio::test]
async fn updates_rating_and_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, property.id, guest.id, 2).await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(UpdateReviewParams {
            id: review.id,
            user_id: guest.id,
            rating: 5,
            comment: "Better second time".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.rating, 5);
    assert_eq!(updated.comment, "Better second time");
    assert_eq!(updated.user.id, guest.id);

    Ok(())
}

/// Expected: Ok(true) then the review is gone
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, property.id, guest.id, 2).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}
