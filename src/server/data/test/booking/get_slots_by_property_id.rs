use super::*;

/// Expected: slots for the property only, every status included
#[tokio::test]
async fn returns_slots_for_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let other = factory::property::create_property(db, host.id).await?;
    let guest = factory::user::create_user(db).await?;
    factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "confirmed",
    )
    .await?;
    factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 2, 1),
        date(2024, 2, 3),
        "cancelled",
    )
    .await?;
    factory::booking::create_booking(
        db,
        other.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "pending",
    )
    .await?;

    let slots = BookingRepository::new(db)
        .get_slots_by_property_id(property.id, None)
        .await?;

    assert_eq!(slots.len(), 2);
    assert!(slots
        .iter()
        .any(|s| s.status == BookingStatus::Confirmed
            && s.stay == stay((2024, 1, 10), (2024, 1, 13))));
    assert!(slots.iter().any(|s| s.status == BookingStatus::Cancelled));

    Ok(())
}

/// Expected: the excluded booking is left out
#[tokio::test]
async fn leaves_out_excluded_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let own = factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "pending",
    )
    .await?;

    let slots = BookingRepository::new(db)
        .get_slots_by_property_id(property.id, Some(own.id))
        .await?;

    assert!(slots.is_empty());

    Ok(())
}
