use axum::{
    extract::{Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::database::SharedRegistry;
use crate::error::ActivityError;
use crate::models::Activity;
use crate::services::activities_service::{self, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&registry))
}

pub async fn activity_handler(
    State(registry): State<SharedRegistry>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, ActivityError> {
    activities_service::get_activity(&registry, &activity_name).map(Json)
}

pub async fn signup_handler(
    State(registry): State<SharedRegistry>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ActivityError> {
    activities_service::signup(&registry, &activity_name, &query.email).map(Json)
}

pub async fn unregister_handler(
    State(registry): State<SharedRegistry>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ActivityError> {
    activities_service::unregister(&registry, &activity_name, &query.email).map(Json)
}
