use super::*;

/// Tests booking a free range.
///
/// Expected: Ok with reservation persisted
#[tokio::test]
async fn books_free_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;

    let service = ReservationService::new(db, &reference_day);
    let reservation = service
        .create(booking(apartment.id, june(1), june(10)))
        .await?;

    assert_eq!(reservation.apartment_id, apartment.id);
    assert_eq!(service.get_by_id(reservation.id).await?, reservation);

    Ok(())
}

/// Tests that a booking starting on another booking's end date conflicts.
///
/// Existing `[June 1, June 10]`, requested `[June 10, June 15]`.
///
/// Expected: Err(AppError::Conflict) and no new reservation
#[tokio::test]
async fn rejects_touching_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    factory::create_reservation(db, apartment.id, june(1), june(10)).await?;

    let service = ReservationService::new(db, &reference_day);
    let result = service
        .create(booking(apartment.id, june(10), june(15)))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg == "Date is already occupied"));
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the day after an existing booking is free.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_range_after_existing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    factory::create_reservation(db, apartment.id, june(1), june(10)).await?;

    let service = ReservationService::new(db, &reference_day);
    let result = service
        .create(booking(apartment.id, june(11), june(15)))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an end date equal to the start date is rejected before any write.
///
/// Expected: Err(AppError::BadRequest) and no reservation
#[tokio::test]
async fn rejects_empty_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;

    let service = ReservationService::new(db, &reference_day);
    let result = service.create(booking(apartment.id, june(5), june(5))).await;

    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "End date must be after start date")
    );
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);

    Ok(())
}

/// Tests booking an apartment that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_apartment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let service = ReservationService::new(db, &reference_day);
    let result = service
        .create(booking(Uuid::new_v4(), june(1), june(3)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Apartment not found"));

    Ok(())
}

/// Tests overlapping bookings racing on a multi-connection database.
///
/// Each round books `[June 1, June 10]` and `[June 5, June 12]` for a fresh apartment
/// from two tasks whose transactions run on separate pool connections.
///
/// Expected: per round one Ok and one Err(AppError::Conflict), never a database error
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn serializes_concurrent_bookings() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_database_file(dir.path().join("bookings.sqlite"))
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let rounds = 10;
    for _ in 0..rounds {
        let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
        let apartment_id = apartment.id;

        let tasks = [(june(1), june(10)), (june(5), june(12))].map(|(start, end)| {
            let db = db.clone();
            let reference_day = reference_day.clone();
            tokio::spawn(async move {
                ReservationService::new(&db, &reference_day)
                    .create(booking(apartment_id, start, end))
                    .await
            })
        });

        let mut created = 0;
        let mut conflicts = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => created += 1,
                Err(AppError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("Concurrent booking failed: {}", e),
            }
        }
        assert_eq!((created, conflicts), (1, 1));
    }

    assert_eq!(entity::prelude::Reservation::find().count(db).await?, rounds);

    Ok(())
}
