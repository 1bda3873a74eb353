use super::*;

/// Tests deleting an attraction through its own kind.
///
/// Expected: Ok(true) and attraction gone
#[tokio::test]
async fn deletes_attraction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let sight = factory::create_attraction(db, owner.id, AttractionKind::Sight, &[]).await?;

    let repo = AttractionRepository::new(db, AttractionKind::Sight);

    assert!(repo.delete(sight.id).await?);
    assert!(repo.find_by_id(sight.id).await?.is_none());

    Ok(())
}

/// Tests that another kind's repository cannot delete the attraction.
///
/// Expected: Ok(false) and attraction kept
#[tokio::test]
async fn does_not_delete_other_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let sight = factory::create_attraction(db, owner.id, AttractionKind::Sight, &[]).await?;

    let repo = AttractionRepository::new(db, AttractionKind::Device);

    assert!(!repo.delete(sight.id).await?);
    assert!(AttractionRepository::new(db, AttractionKind::Sight)
        .find_by_id(sight.id)
        .await?
        .is_some());

    Ok(())
}
