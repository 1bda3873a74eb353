use super::*;

/// Tests linking an attraction to a second apartment of the same owner.
///
/// Expected: Ok and the attraction listed in both apartments
#[tokio::test]
async fn links_to_second_apartment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RecordingFileStore::default();

    let (owner, apartments) = factory::helpers::create_owner_with_apartments(db, 2).await?;
    let beach =
        factory::create_attraction(db, owner.id, AttractionKind::Beach, &[apartments[0].id])
            .await?;

    let service = AttractionService::new(db, AttractionKind::Beach, &store);
    service
        .add_existing_to_apartment(apartments[1].id, beach.id)
        .await?;

    assert_eq!(service.get_in_apartment(apartments[1].id).await?.len(), 1);
    assert!(service
        .get_from_other_apartments(owner.id, apartments[1].id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests linking an attraction twice to the same apartment.
///
/// Expected: Err(AppError::Conflict) and still one link
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RecordingFileStore::default();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let beach =
        factory::create_attraction(db, owner.id, AttractionKind::Beach, &[apartment.id]).await?;

    let service = AttractionService::new(db, AttractionKind::Beach, &store);
    let result = service.add_existing_to_apartment(apartment.id, beach.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::ApartmentAttraction::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking another owner's attraction.
///
/// Expected: Err(AppError::Forbidden) and no new link
#[tokio::test]
async fn forbids_foreign_attraction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RecordingFileStore::default();

    let (_, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let (neighbour, neighbour_apartment) =
        factory::helpers::create_apartment_with_owner(db).await?;
    let beach = factory::create_attraction(
        db,
        neighbour.id,
        AttractionKind::Beach,
        &[neighbour_apartment.id],
    )
    .await?;

    let service = AttractionService::new(db, AttractionKind::Beach, &store);
    let result = service.add_existing_to_apartment(apartment.id, beach.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(entity::prelude::ApartmentAttraction::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking an attraction through the service of another kind.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_attraction_of_other_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RecordingFileStore::default();

    let (owner, apartments) = factory::helpers::create_owner_with_apartments(db, 2).await?;
    let sight =
        factory::create_attraction(db, owner.id, AttractionKind::Sight, &[apartments[0].id])
            .await?;

    let service = AttractionService::new(db, AttractionKind::Beach, &store);
    let result = service
        .add_existing_to_apartment(apartments[1].id, sight.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Attraction not found"));

    Ok(())
}
