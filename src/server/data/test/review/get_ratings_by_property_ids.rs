use super::*;

/// Expected: raw ratings keyed by property; unreviewed properties absent
#[tokio::test]
async fn collects_ratings_per_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, reviewed) = factory::helpers::create_property_with_host(db).await?;
    let unreviewed = factory::property::create_property(db, host.id).await?;
    let first_guest = factory::user::create_user(db).await?;
    let second_guest = factory::user::create_user(db).await?;
    factory::review::create_review(db, reviewed.id, first_guest.id, 5).await?;
    factory::review::create_review(db, reviewed.id, second_guest.id, 4).await?;

    let ratings = ReviewRepository::new(db)
        .get_ratings_by_property_ids(&[reviewed.id, unreviewed.id])
        .await?;

    let mut reviewed_ratings = ratings.get(&reviewed.id).cloned().unwrap();
    reviewed_ratings.sort();
    assert_eq!(reviewed_ratings, vec![4, 5]);
    assert!(!ratings.contains_key(&unreviewed.id));

    Ok(())
}
