use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::api::errors::ApiError;
use crate::application::dto::ItemDto;
use crate::application::use_cases::{FindItemsByTagUseCase, ListTagsUseCase};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TagQuery {
    /// Tag to match, ignoring case; omitted or empty returns every item
    tags: Option<String>,
}

/// GET /api/example/tags
#[utoipa::path(
    get,
    path = "/api/example/tags",
    tag = "tags",
    responses(
        (status = 200, description = "Distinct tag values", body = [String])
    )
)]
pub async fn list_tags_handler(
    State(use_case): State<Arc<ListTagsUseCase>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(use_case.execute().await?))
}

/// GET /api/example/tag?tags=...
#[utoipa::path(
    get,
    path = "/api/example/tag",
    tag = "tags",
    params(TagQuery),
    responses(
        (status = 200, description = "Items with the given tag", body = [ItemDto])
    )
)]
pub async fn find_by_tag_handler(
    State(use_case): State<Arc<FindItemsByTagUseCase>>,
    Query(query): Query<TagQuery>,
) -> Result<Json<Vec<ItemDto>>, ApiError> {
    Ok(Json(use_case.execute(query.tags).await?))
}
