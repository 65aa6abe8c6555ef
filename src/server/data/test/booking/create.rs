use super::*;

/// Expected: Ok with a pending booking holding the given price and dates
#[tokio::test]
async fn creates_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(NewBooking {
            property_id: property.id,
            user_id: guest.id,
            stay: stay((2024, 1, 10), (2024, 1, 13)),
            guests: 2,
            total_price: dec!(300.00),
            special_requests: "Late arrival".to_string(),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.stay.nights(), 3);
    assert_eq!(booking.total_price, dec!(300.00));
    assert_eq!(booking.special_requests, "Late arrival");

    let by_user = repo.get_by_user_id(guest.id).await?;
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].id, booking.id);

    let by_property = repo.get_by_property_id(property.id).await?;
    assert_eq!(by_property.len(), 1);

    Ok(())
}

/// Expected: Err for a stored status the domain does not know
#[tokio::test]
async fn rejects_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let booking = factory::booking::BookingFactory::new(db, property.id, guest.id)
        .status("teleported")
        .build()
        .await?;

    let result = BookingRepository::new(db).find_by_id(booking.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
