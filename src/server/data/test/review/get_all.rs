use super::*;

/// Expected: all reviews without a filter, one property's with it
#[tokio::test]
async fn filters_by_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, first) = factory::helpers::create_property_with_host(db).await?;
    let second = factory::property::create_property(db, host.id).await?;
    let guest = factory::user::create_user(db).await?;
    let on_first = factory::review::create_review(db, first.id, guest.id, 5).await?;
    factory::review::create_review(db, second.id, guest.id, 3).await?;

    let repo = ReviewRepository::new(db);

    assert_eq!(repo.get_all(None).await?.len(), 2);

    let filtered = repo.get_all(Some(first.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, on_first.id);

    Ok(())
}
