use super::*;

/// Tests the owner replacing an attraction's details.
///
/// Expected: Ok with new title, description and coordinates
#[tokio::test]
async fn owner_updates_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RecordingFileStore::default();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let beach = AttractionFactory::new(db, owner.id)
        .images(vec!["beach/1.jpg".to_string(), "beach/2.jpg".to_string()])
        .linked_to(apartment.id)
        .build()
        .await?;

    let service = AttractionService::new(db, AttractionKind::Beach, &store);
    let updated = service
        .update(beach.id, owner.id, details("Quiet Dunes", Some("beach/2.jpg")))
        .await?;

    assert_eq!(updated.title, "Quiet Dunes");
    assert_eq!(updated.title_image.as_deref(), Some("beach/2.jpg"));
    assert_eq!(updated.lat, Some(54.1));
    assert_eq!(service.get_by_id(beach.id).await?, updated);

    Ok(())
}

/// Tests another user updating the attraction.
///
/// Expected: Err(AppError::Forbidden) and the title unchanged
#[tokio::test]
async fn forbids_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = RecordingFileStore::default();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;
    let beach = AttractionFactory::new(db, owner.id)
        .title("Sandy Bay")
        .linked_to(apartment.id)
        .build()
        .await?;

    let service = AttractionService::new(db, AttractionKind::Beach, &store);
    let result = service
        .update(beach.id, stranger.id, details("Renamed", None))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(service.get_by_id(beach.id).await?.title, "Sandy Bay");

    Ok(())
}
