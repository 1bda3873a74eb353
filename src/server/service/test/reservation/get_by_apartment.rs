use super::*;

/// Tests listing an apartment's reservations latest first.
///
/// Expected: Ok with reservations ordered by end date descending
#[tokio::test]
async fn lists_latest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reference_day = reference_day();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let early = factory::create_reservation(db, apartment.id, june(1), june(5)).await?;
    let late = factory::create_reservation(db, apartment.id, june(20), june(25)).await?;

    let service = ReservationService::new(db, &reference_day);
    let result = service.get_by_apartment(apartment.id).await?;

    let ids: Vec<_> = result.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    Ok(())
}
