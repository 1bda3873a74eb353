use super::*;

/// Tests updating dates and client name of a reservation.
///
/// Verifies that the apartment is left unchanged.
///
/// Expected: Ok with updated reservation
#[tokio::test]
async fn updates_dates_and_client_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let reservation = factory::create_reservation(db, apartment.id, june(1), june(10)).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(reservation.id, range(june(3), june(12)), "Jane".to_string())
        .await?;

    assert_eq!(updated.id, reservation.id);
    assert_eq!(updated.apartment_id, apartment.id);
    assert_eq!(updated.start_date, june(3));
    assert_eq!(updated.end_date, june(12));
    assert_eq!(updated.client_name, "Jane");

    Ok(())
}

/// Tests the locking lookup of a reservation.
///
/// Expected: Ok(Some) with the stored row for an existing reservation, Ok(None) otherwise
#[tokio::test]
async fn finds_reservation_for_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let reservation = factory::create_reservation(db, apartment.id, june(1), june(10)).await?;

    let repo = ReservationRepository::new(db);

    assert_eq!(
        repo.find_by_id_for_update(reservation.id).await?,
        Some(reservation)
    );
    assert!(repo
        .find_by_id_for_update(uuid::Uuid::new_v4())
        .await?
        .is_none());

    Ok(())
}
