use serde::{Deserialize, Serialize};

use stockroom_core::DomainResult;
use stockroom_inventory::NewAsset;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/inventory`. Fields are optional here so that a missing
/// field surfaces as a validation error rather than a JSON shape error.
#[derive(Debug, Deserialize)]
pub struct CreateAssetRequest {
    pub name: Option<String>,
    pub qty: Option<i64>,
    pub category: Option<String>,
}

impl CreateAssetRequest {
    pub fn into_new_asset(self) -> DomainResult<NewAsset> {
        NewAsset::new(self.name, self.qty, self.category)
    }
}

// `PUT /api/inventory/:id` deserializes straight into `stockroom_inventory::AssetPatch`.

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn update_successful() -> Self {
        Self {
            message: "Update Successful".to_string(),
        }
    }
}
