use super::*;

/// Tests deleting a reservation together with its reviews.
///
/// Expected: Ok(true) with reservation and reviews removed
#[tokio::test]
async fn deletes_reservation_and_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let reservation = factory::create_reservation(db, apartment.id, june(1), june(10)).await?;
    factory::create_review(db, apartment.id, reservation.id).await?;
    factory::create_review(db, apartment.id, reservation.id).await?;

    let repo = ReservationRepository::new(db);
    let deleted = repo.delete(reservation.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(reservation.id).await?.is_none());
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a reservation that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let deleted = repo.delete(uuid::Uuid::new_v4()).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that reviews of other reservations survive.
///
/// Expected: Ok with one review left
#[tokio::test]
async fn keeps_reviews_of_other_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let deleted = factory::create_reservation(db, apartment.id, june(1), june(10)).await?;
    let kept = factory::create_reservation(db, apartment.id, june(11), june(20)).await?;
    factory::create_review(db, apartment.id, deleted.id).await?;
    factory::create_review(db, apartment.id, kept.id).await?;

    let repo = ReservationRepository::new(db);
    repo.delete(deleted.id).await?;

    assert_eq!(entity::prelude::Review::find().count(db).await?, 1);

    Ok(())
}
