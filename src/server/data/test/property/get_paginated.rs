use super::*;

/// Expected: page of `per_page` listings with the total across all pages
#[tokio::test]
async fn paginates_with_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    for _ in 0..5 {
        factory::property::create_property(db, host.id).await?;
    }

    let repo = PropertyRepository::new(db);
    let (first, total) = repo.get_paginated(&PropertyFilter::default(), 0, 2).await?;
    let (last, _) = repo.get_paginated(&PropertyFilter::default(), 2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first.len(), 2);
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Expected: price bounds inclusive, guest capacity as a minimum
#[tokio::test]
async fn filters_by_price_and_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    PropertyFactory::new(db, host.id)
        .price_per_night(dec!(50))
        .build()
        .await?;
    let mid = PropertyFactory::new(db, host.id)
        .price_per_night(dec!(100))
        .max_guests(6)
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .price_per_night(dec!(150))
        .max_guests(2)
        .build()
        .await?;

    let filter = PropertyFilter {
        min_price: Some(dec!(100)),
        max_price: Some(dec!(150)),
        guests: Some(5),
        ..Default::default()
    };
    let (result, total) = PropertyRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(result[0].id, mid.id);

    Ok(())
}

/// Expected: every requested amenity must be present
#[tokio::test]
async fn filters_by_all_amenities() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let both = PropertyFactory::new(db, host.id)
        .amenities(&["WiFi", "Pool"])
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .amenities(&["WiFi"])
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .amenities(&["Pool table"])
        .build()
        .await?;

    let filter = PropertyFilter {
        amenities: vec!["WiFi".to_string(), "Pool".to_string()],
        ..Default::default()
    };
    let (result, _) = PropertyRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, both.id);

    Ok(())
}

/// Expected: amenities match whole elements exactly, without wildcards or case folding
#[tokio::test]
async fn matches_amenities_exactly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let listing = PropertyFactory::new(db, host.id)
        .amenities(&["WiFi"])
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    for amenity in ["W_Fi", "wifi", "W%", "Wi"] {
        let filter = PropertyFilter {
            amenities: vec![amenity.to_string()],
            ..Default::default()
        };
        let (result, total) = repo.get_paginated(&filter, 0, 10).await?;

        assert!(result.is_empty(), "{amenity} matched");
        assert_eq!(total, 0);
    }

    let filter = PropertyFilter {
        amenities: vec!["WiFi".to_string()],
        ..Default::default()
    };
    let (result, _) = repo.get_paginated(&filter, 0, 10).await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, listing.id);

    Ok(())
}

/// Expected: `%` and `_` in a search term match themselves only
#[tokio::test]
async fn searches_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let discounted = PropertyFactory::new(db, host.id)
        .title("Loft 50% off")
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .title("Loft 500 off")
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let percent = PropertyFilter {
        search: Some("50%".to_string()),
        ..Default::default()
    };
    let (result, _) = repo.get_paginated(&percent, 0, 10).await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, discounted.id);

    let underscore = PropertyFilter {
        search: Some("50_".to_string()),
        ..Default::default()
    };
    let (result, _) = repo.get_paginated(&underscore, 0, 10).await?;
    assert!(result.is_empty());

    Ok(())
}

/// Expected: exact matches on type and city
#[tokio::test]
async fn filters_by_type_and_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let villa = PropertyFactory::new(db, host.id)
        .property_type("villa")
        .city("Nice")
        .build()
        .await?;
    PropertyFactory::new(db, host.id)
        .property_type("villa")
        .city("Cannes")
        .build()
        .await?;
    PropertyFactory::new(db, host.id).city("Nice").build().await?;

    let filter = PropertyFilter {
        property_type: Some(PropertyType::Villa),
        city: Some("Nice".to_string()),
        ..Default::default()
    };
    let (result, _) = PropertyRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, villa.id);

    Ok(())
}

/// Expected: listings with an overlapping pending or confirmed booking are excluded;
/// adjacent and cancelled bookings do not exclude
#[tokio::test]
async fn excludes_properties_booked_for_stay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let guest = factory::user::create_user(db).await?;

    let overlapping = factory::property::create_property(db, host.id).await?;
    factory::booking::create_booking(
        db,
        overlapping.id,
        guest.id,
        date(2024, 1, 10),
        date(2024, 1, 13),
        "pending",
    )
    .await?;

    let adjacent = factory::property::create_property(db, host.id).await?;
    factory::booking::create_booking(
        db,
        adjacent.id,
        guest.id,
        date(2024, 1, 13),
        date(2024, 1, 15),
        "confirmed",
    )
    .await?;

    let cancelled = factory::property::create_property(db, host.id).await?;
    factory::booking::create_booking(
        db,
        cancelled.id,
        guest.id,
        date(2024, 1, 11),
        date(2024, 1, 12),
        "cancelled",
    )
    .await?;

    let filter = PropertyFilter {
        stay: Some(StayRange::new(date(2024, 1, 12), date(2024, 1, 13)).unwrap()),
        ..Default::default()
    };
    let (result, total) = PropertyRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    let mut ids: Vec<i32> = result.iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![adjacent.id, cancelled.id]);

    Ok(())
}

/// Expected: ascending and descending price order
#[tokio::test]
async fn orders_by_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let mid = PropertyFactory::new(db, host.id)
        .price_per_night(dec!(100))
        .build()
        .await?;
    let cheap = PropertyFactory::new(db, host.id)
        .price_per_night(dec!(40))
        .build()
        .await?;
    let dear = PropertyFactory::new(db, host.id)
        .price_per_night(dec!(300))
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let mut filter = PropertyFilter {
        ordering: PropertyOrdering {
            field: PropertyOrderField::PricePerNight,
            descending: false,
        },
        ..Default::default()
    };

    let (ascending, _) = repo.get_paginated(&filter, 0, 10).await?;
    filter.ordering.descending = true;
    let (descending, _) = repo.get_paginated(&filter, 0, 10).await?;

    let ascending: Vec<i32> = ascending.iter().map(|p| p.id).collect();
    let descending: Vec<i32> = descending.iter().map(|p| p.id).collect();
    assert_eq!(ascending, vec![cheap.id, mid.id, dear.id]);
    assert_eq!(descending, vec![dear.id, mid.id, cheap.id]);

    Ok(())
}

/// Expected: highest average rating first, unrated listings last
#[tokio::test]
async fn orders_by_average_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::user::create_user(db).await?;
    let first_guest = factory::user::create_user(db).await?;
    let second_guest = factory::user::create_user(db).await?;

    let unrated = factory::property::create_property(db, host.id).await?;
    let good = factory::property::create_property(db, host.id).await?;
    let best = factory::property::create_property(db, host.id).await?;

    factory::review::create_review(db, good.id, first_guest.id, 4).await?;
    factory::review::create_review(db, good.id, second_guest.id, 3).await?;
    factory::review::create_review(db, best.id, first_guest.id, 5).await?;

    let filter = PropertyFilter {
        ordering: PropertyOrdering {
            field: PropertyOrderField::AverageRating,
            descending: true,
        },
        ..Default::default()
    };
    let (result, _) = PropertyRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    let ids: Vec<i32> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![best.id, good.id, unrated.id]);

    Ok(())
}
