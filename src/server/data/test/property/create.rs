use super::*;

/// Expected: Ok with every field stored, amenities round-tripped as a list
#[tokio::test]
async fn creates_property_for_host() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;

    let repo = PropertyRepository::new(db);
    let property = repo
        .create(host.id, upsert_params("River flat", dec!(120.50)))
        .await?;

    assert_eq!(property.host_id, host.id);
    assert_eq!(property.title, "River flat");
    assert_eq!(property.price_per_night, dec!(120.50));
    assert_eq!(property.property_type, PropertyType::Apartment);
    assert_eq!(property.room_type, RoomType::Entire);
    assert_eq!(property.amenities, vec!["WiFi", "Kitchen"]);

    let stored = repo.find_by_id(property.id).await?.unwrap();
    assert_eq!(stored.title, "River flat");

    Ok(())
}

/// Expected: Err for a stored property type the domain does not know
#[tokio::test]
async fn rejects_unknown_stored_property_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let property = PropertyFactory::new(db, host.id)
        .property_type("castle")
        .build()
        .await?;

    let result = PropertyRepository::new(db).find_by_id(property.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
