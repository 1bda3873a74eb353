use super::*;

/// Tests that the repository stamps its kind on created attractions.
///
/// Expected: Ok with kind Restaurant and the given images
#[tokio::test]
async fn creates_attraction_of_repository_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;

    let repo = AttractionRepository::new(db, AttractionKind::Restaurant);
    let attraction = repo
        .create(CreateAttractionParams {
            apartment_id: apartment.id,
            owner_id: owner.id,
            images_url: vec!["restaurant/a.png".to_string(), "restaurant/b.png".to_string()],
            details: details("Konoba"),
        })
        .await?;

    assert_eq!(attraction.kind, AttractionKind::Restaurant);
    assert_eq!(attraction.owner_id, owner.id);
    assert_eq!(attraction.title, "Konoba");
    assert_eq!(
        attraction.images_url.0,
        vec!["restaurant/a.png".to_string(), "restaurant/b.png".to_string()]
    );

    Ok(())
}
