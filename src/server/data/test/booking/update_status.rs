use super::*;

/// Expected: Ok(Some) with the new status persisted
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let booking = factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "pending",
    )
    .await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(booking.id, BookingStatus::Confirmed)
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Confirmed);
    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);

    Ok(())
}

/// Expected: Ok(None) for a missing booking
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingRepository::new(db)
        .update_status(5, BookingStatus::Cancelled)
        .await?;

    assert!(result.is_none());

    Ok(())
}
