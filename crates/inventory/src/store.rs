//! Resource Store: the ordered, process-lifetime collection of assets.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::AssetId;

use crate::asset::{Asset, AssetPatch, NewAsset};
use crate::ids::IdGenerator;

/// Result of an in-place update.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No record carried the requested id; the store is unchanged.
    NoMatch,
}

/// Store abstraction the HTTP layer is handed at startup.
///
/// Insertion order is preserved by `list`. Updates keep the record in its
/// original position.
pub trait AssetStore: Send + Sync {
    fn list(&self) -> Vec<Asset>;
    fn get(&self, id: AssetId) -> Option<Asset>;
    fn create(&self, new: NewAsset) -> Asset;
    fn update(&self, id: AssetId, patch: &AssetPatch) -> UpdateOutcome;
    /// Remove every record with `id`; returns how many were removed.
    fn delete(&self, id: AssetId) -> usize;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> AssetStore for Arc<S>
where
    S: AssetStore + ?Sized,
{
    fn list(&self) -> Vec<Asset> {
        (**self).list()
    }

    fn get(&self, id: AssetId) -> Option<Asset> {
        (**self).get(id)
    }

    fn create(&self, new: NewAsset) -> Asset {
        (**self).create(new)
    }

    fn update(&self, id: AssetId, patch: &AssetPatch) -> UpdateOutcome {
        (**self).update(id, patch)
    }

    fn delete(&self, id: AssetId) -> usize {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// The records every fresh process starts with.
pub fn seed_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: AssetId::new(1),
            name: "Cisco Catalyst 9300".to_string(),
            qty: 2,
            category: "Networking".to_string(),
        },
        Asset {
            id: AssetId::new(2),
            name: "PowerEdge R750".to_string(),
            qty: 5,
            category: "Servers".to_string(),
        },
    ]
}

/// In-memory store. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryAssetStore {
    inner: RwLock<Vec<Asset>>,
    ids: IdGenerator,
}

impl InMemoryAssetStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }

    /// Store preloaded with [`seed_assets`].
    pub fn seeded() -> Self {
        Self::from_assets(seed_assets())
    }

    pub fn with_ids(ids: IdGenerator) -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            ids,
        }
    }

    pub fn from_assets(assets: Vec<Asset>) -> Self {
        let ids = IdGenerator::new();
        for asset in &assets {
            ids.observe(asset.id);
        }
        Self {
            inner: RwLock::new(assets),
            ids,
        }
    }

    // A panic while holding the lock cannot leave a half-written Vec behind,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Asset>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Asset>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetStore for InMemoryAssetStore {
    fn list(&self) -> Vec<Asset> {
        self.read().clone()
    }

    fn get(&self, id: AssetId) -> Option<Asset> {
        self.read().iter().find(|a| a.id == id).cloned()
    }

    fn create(&self, new: NewAsset) -> Asset {
        let mut assets = self.write();
        // Allocate under the write lock so sequence order matches id order.
        let asset = new.into_asset(self.ids.next_id());
        assets.push(asset.clone());
        tracing::debug!(id = %asset.id, total = assets.len(), "asset created");
        asset
    }

    fn update(&self, id: AssetId, patch: &AssetPatch) -> UpdateOutcome {
        let mut assets = self.write();
        match assets.iter_mut().find(|a| a.id == id) {
            Some(asset) => {
                patch.apply_to(asset);
                tracing::debug!(%id, "asset updated");
                UpdateOutcome::Updated
            }
            None => UpdateOutcome::NoMatch,
        }
    }

    fn delete(&self, id: AssetId) -> usize {
        let mut assets = self.write();
        let before = assets.len();
        assets.retain(|a| a.id != id);
        before - assets.len()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
