use super::*;

/// Expected: Ok(Some) with every writable field replaced
#[tokio::test]
async fn replaces_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;

    let mut params = upsert_params("Renamed", dec!(80.00));
    params.property_type = PropertyType::Cabin;
    params.is_available = false;

    let updated = PropertyRepository::new(db)
        .update(property.id, params)
        .await?
        .unwrap();

    assert_eq!(updated.id, property.id);
    assert_eq!(updated.host_id, host.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.property_type, PropertyType::Cabin);
    assert_eq!(updated.price_per_night, dec!(80));
    assert!(!updated.is_available);

    Ok(())
}

/// Expected: Ok(None) for a missing property
#[tokio::test]
async fn returns_none_for_missing_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyRepository::new(db)
        .update(7, upsert_params("Ghost", dec!(10)))
        .await?;

    assert!(result.is_none());

    Ok(())
}
