use super::*;
use migration::BOOKING_OVERLAP_GUARD;

fn new_booking(property_id: i32, user_id: i32, stay: StayRange) -> NewBooking {
    NewBooking {
        property_id,
        user_id,
        stay,
        guests: 1,
        total_price: dec!(100),
        special_requests: String::new(),
    }
}

/// Expected: Err from the storage guard when inserting over a blocking booking
#[tokio::test]
async fn rejects_overlapping_insert() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .with_booking_overlap_guard()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;

    let repo = BookingRepository::new(db);
    repo.create(new_booking(property.id, guest.id, stay((2024, 1, 10), (2024, 1, 13))))
        .await?;

    let result = repo
        .create(new_booking(property.id, guest.id, stay((2024, 1, 12), (2024, 1, 14))))
        .await;

    match result {
        Err(AppError::DbErr(err)) => assert!(err.to_string().contains(BOOKING_OVERLAP_GUARD)),
        other => panic!("expected overlap guard error, got {:?}", other),
    }

    Ok(())
}

/// Expected: back-to-back stays and stays over cancelled bookings are accepted
#[tokio::test]
async fn accepts_adjacent_and_cancelled_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .with_booking_overlap_guard()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 2, 1),
        date(2024, 2, 5),
        "cancelled",
    )
    .await?;

    let repo = BookingRepository::new(db);
    repo.create(new_booking(property.id, guest.id, stay((2024, 1, 10), (2024, 1, 13))))
        .await?;
    repo.create(new_booking(property.id, guest.id, stay((2024, 1, 13), (2024, 1, 15))))
        .await?;
    repo.create(new_booking(property.id, guest.id, stay((2024, 2, 2), (2024, 2, 4))))
        .await?;

    assert_eq!(repo.get_by_property_id(property.id).await?.len(), 4);

    Ok(())
}

/// Expected: Err when reactivating dates another booking now holds
#[tokio::test]
async fn rejects_overlapping_status_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .with_booking_overlap_guard()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let guest = factory::user::create_user(db).await?;
    let cancelled = factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "cancelled",
    )
    .await?;
    factory::booking::create_booking(
        db,
        property.id,
        guest.id,
        date(2024, 1, 11),
        date(2024, 1, 12),
        "confirmed",
    )
    .await?;

    let result = BookingRepository::new(db)
        .update_status(cancelled.id, BookingStatus::Pending)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
