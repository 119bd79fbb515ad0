use serde::{Deserialize, Serialize};

use stockroom_core::{AssetId, DomainError, DomainResult};

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub qty: i64,
    pub category: String,
}

/// Validated creation input. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    name: String,
    qty: i64,
    category: String,
}

impl NewAsset {
    /// Build creation input from possibly-missing fields.
    ///
    /// `name` and `category` must be present and non-blank, `qty` must be present.
    pub fn new(
        name: Option<String>,
        qty: Option<i64>,
        category: Option<String>,
    ) -> DomainResult<Self> {
        let name = required_text("name", name)?;
        let qty = qty.ok_or_else(|| DomainError::validation("qty is required"))?;
        let category = required_text("category", category)?;
        Ok(Self {
            name,
            qty,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qty(&self) -> i64 {
        self.qty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn into_asset(self, id: AssetId) -> Asset {
        Asset {
            id,
            name: self.name,
            qty: self.qty,
            category: self.category,
        }
    }
}

/// Partial update: supplied fields overwrite, absent fields are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl AssetPatch {
    /// Reject patches that would blank out a required text field.
    pub fn validate(&self) -> DomainResult<()> {
        if matches!(&self.name, Some(n) if n.trim().is_empty()) {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if matches!(&self.category, Some(c) if c.trim().is_empty()) {
            return Err(DomainError::validation("category cannot be empty"));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.qty.is_none() && self.category.is_none()
    }

    /// Shallow merge onto an existing record. The id never changes.
    pub fn apply_to(&self, asset: &mut Asset) {
        if let Some(name) = &self.name {
            asset.name = name.clone();
        }
        if let Some(qty) = self.qty {
            asset.qty = qty;
        }
        if let Some(category) = &self.category {
            asset.category = category.clone();
        }
    }
}

fn required_text(field: &str, value: Option<String>) -> DomainResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(DomainError::validation(format!("{field} cannot be empty"))),
        None => Err(DomainError::validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch() -> Asset {
        Asset {
            id: AssetId::new(7),
            name: "Switch".to_string(),
            qty: 3,
            category: "Net".to_string(),
        }
    }

    #[test]
    fn new_asset_requires_every_field() {
        let err = NewAsset::new(None, Some(1), Some("Y".into())).unwrap_err();
        assert_eq!(err, DomainError::validation("name is required"));

        let err = NewAsset::new(Some("X".into()), None, Some("Y".into())).unwrap_err();
        assert_eq!(err, DomainError::validation("qty is required"));

        let err = NewAsset::new(Some("X".into()), Some(1), None).unwrap_err();
        assert_eq!(err, DomainError::validation("category is required"));
    }

    #[test]
    fn new_asset_rejects_blank_text() {
        let err = NewAsset::new(Some("   ".into()), Some(1), Some("Y".into())).unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut asset = switch();
        let patch = AssetPatch {
            qty: Some(10),
            ..AssetPatch::default()
        };
        patch.apply_to(&mut asset);

        assert_eq!(asset.qty, 10);
        assert_eq!(asset.name, "Switch");
        assert_eq!(asset.category, "Net");
        assert_eq!(asset.id, AssetId::new(7));
    }

    #[test]
    fn patch_ignores_id_in_body() {
        let patch: AssetPatch = serde_json::from_str(r#"{"id": 99, "name": "Router"}"#).unwrap();
        let mut asset = switch();
        patch.apply_to(&mut asset);
        assert_eq!(asset.id, AssetId::new(7));
        assert_eq!(asset.name, "Router");
    }

    #[test]
    fn patch_with_blank_category_is_invalid() {
        let patch = AssetPatch {
            category: Some(String::new()),
            ..AssetPatch::default()
        };
        assert_eq!(
            patch.validate().unwrap_err(),
            DomainError::validation("category cannot be empty")
        );
        assert!(AssetPatch::default().validate().is_ok());
        assert!(AssetPatch::default().is_empty());
    }

    #[test]
    fn asset_wire_shape() {
        let json = serde_json::to_value(switch()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Switch", "qty": 3, "category": "Net"})
        );
    }
}
