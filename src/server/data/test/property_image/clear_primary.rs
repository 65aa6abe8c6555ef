use super::*;

/// Expected: no primary image left on the property, other properties untouched
#[tokio::test]
async fn clears_primary_flag_on_one_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, property) = factory::helpers::create_property_with_host(db).await?;
    let other = factory::property::create_property(db, host.id).await?;
    factory::property_image::create_image(db, property.id, true).await?;
    let other_primary = factory::property_image::create_image(db, other.id, true).await?;

    let repo = PropertyImageRepository::new(db);
    repo.clear_primary(property.id).await?;

    let images = repo.get_by_property_id(property.id).await?;
    assert!(images.iter().all(|i| !i.is_primary));

    let other_image = repo.find_by_id(other_primary.id).await?.unwrap();
    assert!(other_image.is_primary);

    Ok(())
}
