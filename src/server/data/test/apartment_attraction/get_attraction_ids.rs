use super::*;

/// Tests listing the attractions linked to one apartment.
///
/// Expected: Ok with both linked attraction IDs
#[tokio::test]
async fn lists_ids_for_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let beach =
        factory::create_attraction(db, owner.id, AttractionKind::Beach, &[apartment.id]).await?;
    let shop =
        factory::create_attraction(db, owner.id, AttractionKind::Shop, &[apartment.id]).await?;
    factory::create_attraction(db, owner.id, AttractionKind::Shop, &[]).await?;

    let repo = AttractionLinkRepository::new(db);
    let mut result = repo.get_attraction_ids_for_apartment(apartment.id).await?;
    result.sort();

    let mut expected = vec![beach.id, shop.id];
    expected.sort();
    assert_eq!(result, expected);

    Ok(())
}

/// Tests that an attraction shared by several apartments is listed once.
///
/// Expected: Ok with each attraction ID exactly once
#[tokio::test]
async fn deduplicates_ids_across_apartments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartments) = factory::helpers::create_owner_with_apartments(db, 3).await?;
    let shared = factory::create_attraction(
        db,
        owner.id,
        AttractionKind::Beach,
        &[apartments[0].id, apartments[1].id, apartments[2].id],
    )
    .await?;
    let single =
        factory::create_attraction(db, owner.id, AttractionKind::Beach, &[apartments[1].id])
            .await?;

    let repo = AttractionLinkRepository::new(db);
    let mut result = repo
        .get_attraction_ids_for_apartments(&[apartments[0].id, apartments[1].id])
        .await?;
    result.sort();

    let mut expected = vec![shared.id, single.id];
    expected.sort();
    assert_eq!(result, expected);

    Ok(())
}
