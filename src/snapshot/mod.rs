//! Snapshot loading: the boundary between raw API payloads and the engine
//!
//! Raw records ([`raw`]) are deserialized exactly as the API sends them, then
//! normalized ([`normalize`]) into the typed models in [`crate::models`].
//! A [`SnapshotSource`] ties the two together.

pub mod normalize;
pub mod raw;
pub mod source;

pub use normalize::{parse_api_date, NormalizeMode, Normalizer};
pub use raw::{RawAmount, RawBudget, RawCategory, RawGoal, RawSnapshot, RawTransaction};
pub use source::{BundleFileSource, DirectorySource, SnapshotSource};
