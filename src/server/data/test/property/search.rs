use super::*;

/// Expected: matches title or city case-insensitively, skips unavailable listings
#[tokio::test]
async fn matches_text_fields_of_available_properties() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let by_title = PropertyFactory::new(db, host.id)
        .title("Beach house")
        .build()
        .await?;
    let by_city = PropertyFactory::new(db, host.id)
        .city("Beachwood")
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .title("Beach bungalow")
        .available(false)
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .title("Mountain lodge")
        .build()
        .await?;

    let result = PropertyRepository::new(db).search("beach").await?;

    let mut ids: Vec<i32> = result.iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(ids, vec![by_title.id, by_city.id]);

    Ok(())
}

/// Expected: an underscore does not stand in for any character
#[tokio::test]
async fn treats_underscore_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    PropertyFactory::new(db, host.id)
        .title("Beach house")
        .build()
        .await?;
    let snake = PropertyFactory::new(db, host.id)
        .title("beach_house")
        .build()
        .await?;

    let result = PropertyRepository::new(db).search("h_h").await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, snake.id);

    Ok(())
}
