use super::*;

/// Tests creating a reservation.
///
/// Verifies that the repository persists all fields and generates an ID.
///
/// Expected: Ok with reservation stored
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            apartment_id: apartment.id,
            start_date: june(1),
            end_date: june(10),
            client_name: "Jane".to_string(),
        })
        .await?;

    assert_eq!(reservation.apartment_id, apartment.id);
    assert_eq!(reservation.start_date, june(1));
    assert_eq!(reservation.end_date, june(10));
    assert_eq!(reservation.client_name, "Jane");

    let stored = repo.find_by_id(reservation.id).await?;
    assert_eq!(stored, Some(reservation));

    Ok(())
}

/// Tests that a reservation for a missing apartment is rejected.
///
/// Verifies the foreign key on apartment_id.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_nonexistent_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParams {
            apartment_id: uuid::Uuid::new_v4(),
            start_date: june(1),
            end_date: june(10),
            client_name: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
