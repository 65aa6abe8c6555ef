use super::*;

/// Expected: renter and host see the booking; anyone else gets Err(NotFound)
#[tokio::test]
async fn only_parties_see_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let booking = factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "pending",
    )
    .await?;

    let service = BookingService::new(db);

    assert_eq!(service.get(booking.id, guest.id).await?.id, booking.id);
    assert_eq!(service.get(booking.id, host.id).await?.id, booking.id);
    assert!(matches!(
        service.get(booking.id, stranger.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.cancel(booking.id, stranger.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Expected: host lists property bookings; renters list their own
#[tokio::test]
async fn lists_by_property_for_host_and_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let other_guest = factory::user::create_user(db).await?;
    factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "pending",
    )
    .await?;
    factory::booking::create_booking(
        db,
        property.id,
        other_guest.id,
        date(2024, 2, 10),
        date(2024, 2, 13),
        "confirmed",
    )
    .await?;

    let service = BookingService::new(db);

    assert_eq!(service.get_for_property(property.id, host.id).await?.len(), 2);
    assert_eq!(service.get_for_user(guest.id).await?.len(), 1);
    assert!(matches!(
        service.get_for_property(property.id, guest.id).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
