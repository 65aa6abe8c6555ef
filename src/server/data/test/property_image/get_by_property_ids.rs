use super::*;

/// Expected: images grouped by property; properties without images absent
#[tokio::test]
async fn groups_images_by_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, first) = factory::helpers::create_property_with_host(db).await?;
    let second = factory::property::create_property(db, host.id).await?;
    let bare = factory::property::create_property(db, host.id).await?;
    factory::property_image::create_image(db, first.id, true).await?;
    factory::property_image::create_image(db, first.id, false).await?;
    factory::property_image::create_image(db, second.id, false).await?;

    let grouped = PropertyImageRepository::new(db)
        .get_by_property_ids(&[first.id, second.id, bare.id])
        .await?;

    assert_eq!(grouped.get(&first.id).map(Vec::len), Some(2));
    assert_eq!(grouped.get(&second.id).map(Vec::len), Some(1));
    assert!(!grouped.contains_key(&bare.id));

    Ok(())
}

/// Expected: empty map without querying
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grouped = PropertyImageRepository::new(db)
        .get_by_property_ids(&[])
        .await?;

    assert!(grouped.is_empty());

    Ok(())
}
