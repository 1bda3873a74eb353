use super::*;
use test_utils::factory::attraction::AttractionFactory;

/// Tests looking up paths shared with attractions of any owner and kind.
///
/// The beach lists three paths: one shared with another owner's beach, one shared with
/// a restaurant, and one of its own.
///
/// Expected: Ok with exactly the two shared paths
#[tokio::test]
async fn finds_paths_listed_by_other_attractions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other_owner = factory::create_user(db).await?;
    let images = vec![
        "beach/shared.jpg".to_string(),
        "food/shared.jpg".to_string(),
        "beach/own.jpg".to_string(),
    ];
    let beach = AttractionFactory::new(db, owner.id)
        .images(images.clone())
        .build()
        .await?;
    AttractionFactory::new(db, other_owner.id)
        .images(vec!["beach/shared.jpg".to_string()])
        .build()
        .await?;
    AttractionFactory::new(db, owner.id)
        .kind(AttractionKind::Restaurant)
        .images(vec!["food/shared.jpg".to_string(), "food/menu.jpg".to_string()])
        .build()
        .await?;

    let repo = AttractionRepository::new(db, AttractionKind::Beach);
    let referenced = repo
        .find_images_referenced_elsewhere(&images, beach.id)
        .await?;

    let mut referenced: Vec<String> = referenced.into_iter().collect();
    referenced.sort();
    assert_eq!(referenced, vec!["beach/shared.jpg", "food/shared.jpg"]);

    Ok(())
}

/// Tests that an attraction's own listing does not count as a reference.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn ignores_the_attraction_itself() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attraction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let images = vec!["beach/own.jpg".to_string()];
    let beach = AttractionFactory::new(db, owner.id)
        .images(images.clone())
        .build()
        .await?;

    let repo = AttractionRepository::new(db, AttractionKind::Beach);
    let referenced = repo
        .find_images_referenced_elsewhere(&images, beach.id)
        .await?;

    assert!(referenced.is_empty());

    Ok(())
}
