use super::*;

/// Expected: Ok with the image stored on its property, listed in insertion order
#[tokio::test]
async fn creates_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_host(db).await?;
    let existing = factory::property_image::create_image(db, property.id, false).await?;

    let repo = PropertyImageRepository::new(db);
    let image = repo
        .create(CreatePropertyImageParams {
            property_id: property.id,
            url: "https://img.example.com/front.jpg".to_string(),
            caption: "Front".to_string(),
            is_primary: true,
        })
        .await?;

    assert_eq!(image.property_id, property.id);
    assert!(image.is_primary);

    let images = repo.get_by_property_id(property.id).await?;
    let ids: Vec<i32> = images.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![existing.id, image.id]);

    Ok(())
}
