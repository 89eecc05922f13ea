use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use serde::Serialize;

use mindwell_support::resources::{
    Category, Resource, ResourceFilter, catalog, filter_resources, find_resource,
};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ResourceList {
    total: usize,
    resources: Vec<Resource>,
}

#[derive(Serialize)]
pub struct CategorySummary {
    id: Category,
    name: &'static str,
}

pub async fn list_resources(
    filter: Result<Query<ResourceFilter>, QueryRejection>,
) -> Result<Json<ResourceList>, ApiError> {
    let Query(filter) = filter?;
    let resources: Vec<Resource> = filter_resources(&filter).into_iter().cloned().collect();
    Ok(Json(ResourceList {
        total: catalog().len(),
        resources,
    }))
}

pub async fn get_resource(Path(id): Path<String>) -> Result<Json<Resource>, ApiError> {
    Ok(Json(find_resource(&id)?.clone()))
}

pub async fn list_categories() -> Json<Vec<CategorySummary>> {
    Json(
        Category::ALL
            .iter()
            .map(|c| CategorySummary {
                id: *c,
                name: c.display_name(),
            })
            .collect(),
    )
}
