use super::*;

/// Tests that the excluded apartment and foreign apartments are left out.
///
/// Expected: Ok with the owner's remaining apartment IDs
#[tokio::test]
async fn excludes_given_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_apartment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartments) = factory::helpers::create_owner_with_apartments(db, 3).await?;
    let (_, foreign) = factory::helpers::create_apartment_with_owner(db).await?;

    let repo = ApartmentRepository::new(db);
    let mut result = repo
        .get_ids_by_owner_except(owner.id, apartments[0].id)
        .await?;
    result.sort();

    let mut expected = vec![apartments[1].id, apartments[2].id];
    expected.sort();
    assert_eq!(result, expected);
    assert!(!result.contains(&foreign.id));

    Ok(())
}

/// Tests an owner with a single apartment.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_single_apartment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_apartment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;

    let repo = ApartmentRepository::new(db);
    let result = repo.get_ids_by_owner_except(owner.id, apartment.id).await?;

    assert!(result.is_empty());

    Ok(())
}
