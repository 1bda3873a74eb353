use crate::server::{
    error::AppError,
    model::apartment::{CreateApartmentParams, UpdateApartmentParams},
    service::apartment::ApartmentService,
};
use test_utils::{builder::TestBuilder, factory};


/// Tests creating an apartment and reading it back.
///
/// Expected: Ok with the same apartment from get_by_id and get_by_owner
#[tokio::test]
async fn creates_and_reads_apartment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_apartment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let service = ApartmentService::new(db);
    let apartment = service
        .create(CreateApartmentParams {
            owner_id: owner.id,
            name: "Sea View".to_string(),
            address: "Harbour Street 1".to_string(),
        })
        .await?;

    assert_eq!(service.get_by_id(apartment.id).await?, apartment);
    assert_eq!(service.get_by_owner(owner.id).await?, vec![apartment]);

    Ok(())
}

/// Tests reading an apartment that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_apartment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_apartment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ApartmentService::new(db);
    let result = service.get_by_id(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Apartment not found"));

    Ok(())
}
