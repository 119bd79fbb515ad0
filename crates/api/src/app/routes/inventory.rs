use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::{get, put},
};
use chrono::Utc;

use stockroom_core::AssetId;
use stockroom_inventory::{Asset, AssetPatch, UpdateOutcome};

use crate::app::SharedStore;
use crate::app::dto::{CreateAssetRequest, MessageResponse};
use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_assets).post(create_asset))
        .route("/export", get(export_assets))
        .route("/:id", put(update_asset).delete(delete_asset))
}

pub async fn list_assets(Extension(store): Extension<SharedStore>) -> Json<Vec<Asset>> {
    Json(store.list())
}

pub async fn create_asset(
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Asset>), ApiError> {
    let Json(body) = payload?;
    let asset = store.create(body.into_new_asset()?);

    tracing::info!(id = %asset.id, name = %asset.name, "asset created");
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Unknown ids still answer "Update Successful"; the store is left untouched.
pub async fn update_asset(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<AssetPatch>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: AssetId = id.parse()?;
    let Json(patch) = payload?;
    patch.validate()?;

    match store.update(id, &patch) {
        UpdateOutcome::Updated => tracing::info!(%id, "asset updated"),
        UpdateOutcome::NoMatch => tracing::debug!(%id, "update matched no asset"),
    }

    Ok(Json(MessageResponse::update_successful()))
}

/// Idempotent: deleting an unknown id is still a 204.
pub async fn delete_asset(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: AssetId = id.parse()?;
    let removed = store.delete(id);

    if removed == 0 {
        tracing::debug!(%id, "delete matched no asset");
    } else {
        tracing::info!(%id, removed, "asset deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Full snapshot as a dated JSON download.
pub async fn export_assets(Extension(store): Extension<SharedStore>) -> impl IntoResponse {
    let snapshot = store.list();
    let disposition = format!(
        "attachment; filename=\"{}\"",
        backup_file_name(Utc::now().date_naive())
    );

    tracing::info!(records = snapshot.len(), "inventory snapshot exported");
    (
        [(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition)
                .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
        )],
        Json(snapshot),
    )
}

fn backup_file_name(date: chrono::NaiveDate) -> String {
    format!("inventory-backup-{}.json", date.format("%Y-%m-%d"))
}
