use super::*;

/// Tests linking and unlinking an attraction.
///
/// Expected: exists() follows link() and unlink()
#[tokio::test]
async fn links_and_unlinks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let beach = factory::create_attraction(db, owner.id, AttractionKind::Beach, &[]).await?;

    let repo = AttractionLinkRepository::new(db);

    assert!(!repo.exists(apartment.id, beach.id).await?);
    repo.link(apartment.id, beach.id).await?;
    assert!(repo.exists(apartment.id, beach.id).await?);

    assert!(repo.unlink(apartment.id, beach.id).await?);
    assert!(!repo.exists(apartment.id, beach.id).await?);

    Ok(())
}

/// Tests that a pair cannot be linked twice.
///
/// Verifies the composite primary key on the link table.
///
/// Expected: Err on the second link
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let beach =
        factory::create_attraction(db, owner.id, AttractionKind::Beach, &[apartment.id]).await?;

    let repo = AttractionLinkRepository::new(db);
    let result = repo.link(apartment.id, beach.id).await;

    assert!(result.is_err());
    assert_eq!(repo.count_links(beach.id).await?, 1);

    Ok(())
}

/// Tests unlinking a pair that is not linked.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unlink_returns_false_when_not_linked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, apartment) = factory::helpers::create_apartment_with_owner(db).await?;
    let beach = factory::create_attraction(db, owner.id, AttractionKind::Beach, &[]).await?;

    let repo = AttractionLinkRepository::new(db);

    assert!(!repo.unlink(apartment.id, beach.id).await?);

    Ok(())
}
