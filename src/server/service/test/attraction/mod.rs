use crate::server::{
    error::AppError,
    model::attraction::{AttractionDetails, CreateAttractionParams},
    service::{attraction::AttractionService, test::RecordingFileStore},
};
use entity::attraction::AttractionKind;
use sea_orm::{EntityTrait, PaginatorTrait};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory, factory::attraction::AttractionFactory};
use uuid::Uuid;

mod add_existing_to_apartment;
mod update;

fn details(title: &str, title_image: Option<&str>) -> AttractionDetails {
    AttractionDetails {
        title: title.to_string(),
        description: format!("About {}", title),
        title_image: title_image.map(str::to_string),
        lat: Some(54.1),
        lng: Some(12.1),
    }
}
