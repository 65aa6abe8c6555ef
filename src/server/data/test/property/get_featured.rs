use super::*;

/// Expected: only listings both featured and available
#[tokio::test]
async fn returns_featured_available_properties() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let featured = PropertyFactory::new(db, host.id)
        .featured(true)
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .featured(true)
        .available(false)
        .build()
        .await?;
    factory::property::create_property(db, host.id).await?;

    let result = PropertyRepository::new(db).get_featured().await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, featured.id);

    Ok(())
}
