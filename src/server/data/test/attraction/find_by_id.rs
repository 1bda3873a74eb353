use super::*;

/// Tests that an attraction is found through its own kind.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_attraction_of_same_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let beach = factory::create_attraction(db, owner.id, AttractionKind::Beach, &[]).await?;

    let repo = AttractionRepository::new(db, AttractionKind::Beach);
    let result = repo.find_by_id(beach.id).await?;

    assert_eq!(result.map(|a| a.id), Some(beach.id));

    Ok(())
}

/// Tests that an attraction is invisible through another kind.
///
/// Expected: Ok(None) for both plain and locking lookups
#[tokio::test]
async fn hides_attraction_of_other_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let beach = factory::create_attraction(db, owner.id, AttractionKind::Beach, &[]).await?;

    let repo = AttractionRepository::new(db, AttractionKind::Shop);

    assert!(repo.find_by_id(beach.id).await?.is_none());
    assert!(repo.find_by_id_for_update(beach.id).await?.is_none());

    Ok(())
}
