//! Inventory domain module.
//!
//! Holds the `Asset` record and the in-memory Resource Store that owns the
//! process-lifetime collection of assets. No IO, no HTTP.

pub mod asset;
pub mod ids;
pub mod store;

pub use asset::{Asset, AssetPatch, NewAsset};
pub use ids::IdGenerator;
pub use store::{AssetStore, InMemoryAssetStore, UpdateOutcome, seed_assets};
