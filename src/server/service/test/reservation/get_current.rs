use super::*;

/// Tests finding the reservation covering today.
///
/// The clock is frozen at 2025-06-15 12:00 UTC, so "today" starts at June 15 00:00 UTC.
///
/// Expected: Ok(Some) with the covering reservation
#[tokio::test]
async fn returns_reservation_covering_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    factory::create_reservation(db, apartment.id, june(1), june(10)).await?;
    let current = factory::create_reservation(db, apartment.id, june(12), june(18)).await?;

    let service = ReservationService::new(db, &reference_day);
    let result = service.get_current(apartment.id).await?;

    assert_eq!(result.map(|r| r.id), Some(current.id));

    Ok(())
}

/// Tests a reservation ending exactly at the start of today.
///
/// Expected: Ok(Some), the end instant is inclusive
#[tokio::test]
async fn includes_reservation_ending_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let ending = factory::create_reservation(db, apartment.id, june(10), june(15)).await?;

    let service = ReservationService::new(db, &reference_day);
    let result = service.get_current(apartment.id).await?;

    assert_eq!(result.map(|r| r.id), Some(ending.id));

    Ok(())
}

/// Tests that the reference timezone decides which day is today.
///
/// At 2025-06-15 12:00 UTC the Berlin day started at June 14 22:00 UTC. A reservation
/// ending at June 14 23:00 UTC therefore still covers the Berlin "now", but not the UTC one.
///
/// Expected: Ok(Some) in Berlin, Ok(None) in UTC
#[tokio::test]
async fn resolves_today_in_reference_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let late_checkout = Utc.with_ymd_and_hms(2025, 6, 14, 23, 0, 0).unwrap();
    factory::create_reservation(db, apartment.id, june(10), late_checkout).await?;

    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let berlin = ReferenceDay::new(Arc::new(FixedClock(now)), chrono_tz::Europe::Berlin);
    let utc = ReferenceDay::new(Arc::new(FixedClock(now)), chrono_tz::UTC);

    assert!(ReservationService::new(db, &berlin)
        .get_current(apartment.id)
        .await?
        .is_some());
    assert!(ReservationService::new(db, &utc)
        .get_current(apartment.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests an apartment without reservations, or one that does not exist.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn returns_none_without_current_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;

    let service = ReservationService::new(db, &reference_day);

    assert!(service.get_current(apartment.id).await?.is_none());
    assert!(service.get_current(Uuid::new_v4()).await?.is_none());

    Ok(())
}
