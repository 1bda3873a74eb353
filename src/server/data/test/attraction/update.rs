use super::*;

/// Tests replacing descriptive fields without touching images.
///
/// Expected: Ok with new details and unchanged images
#[tokio::test]
async fn updates_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let beach = factory::attraction::AttractionFactory::new(db, owner.id)
        .images(vec!["beach/a.png".to_string()])
        .build()
        .await?;

    let repo = AttractionRepository::new(db, AttractionKind::Beach);
    let updated = repo.update_details(beach.id, details("Renamed")).await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.lat, Some(43.5));
    assert_eq!(updated.images_url.0, vec!["beach/a.png".to_string()]);
    assert_eq!(updated.title_image, None);

    Ok(())
}

/// Tests replacing the image list and title image.
///
/// Expected: Ok with the new list and title image
#[tokio::test]
async fn sets_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let beach = factory::create_attraction(db, owner.id, AttractionKind::Beach, &[]).await?;

    let repo = AttractionRepository::new(db, AttractionKind::Beach);
    let updated = repo
        .set_images(
            beach.id,
            vec!["beach/a.png".to_string(), "beach/b.png".to_string()],
            Some("beach/b.png".to_string()),
        )
        .await?;

    assert_eq!(updated.images_url.0.len(), 2);
    assert_eq!(updated.title_image.as_deref(), Some("beach/b.png"));

    Ok(())
}
