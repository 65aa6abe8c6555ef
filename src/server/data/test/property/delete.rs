use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Expected: Ok(true) and the property's bookings, reviews and images are gone
#[tokio::test]
async fn deletes_property_with_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
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
        date(2024, 1, 10),
        date(2024, 1, 13),
        "confirmed",
    )
    .await?;
    factory::review::create_review(db, property.id, guest.id, 5).await?;
    factory::property_image::create_image(db, property.id, true).await?;

    let deleted = PropertyRepository::new(db).delete(property.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Property::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PropertyImage::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Ok(false) for a missing property
#[tokio::test]
async fn returns_false_for_missing_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PropertyRepository::new(db).delete(99).await?);

    Ok(())
}
