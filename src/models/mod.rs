//! Data models for asset identity resolution.
//!
//! - [`InstallationDescriptor`]: A located game installation and its companion tools
//! - [`GameIcon`]: Icon resolved for an installation
//! - [`ShapeQuery`] / [`ReferenceShapeEntry`]: Head shape parameters and the curated rows they match against
//! - [`HeadClassification`]: Canonical head asset plus the scale instruction for the caller's mesh
//! - [`ResolverConfig`]: Settings loaded from `Resolver Settings.yaml`
//!
//! Every type here is plain data. Descriptors and classifications are immutable once
//! returned and owned by the caller.

pub mod config;
pub mod head;
pub mod installation;

pub use config::{ResolverConfig, ResolverSettings};
pub use head::{
    AssetReference, BevelFamily, HeadClassification, MeshFamily, ReferenceShapeEntry,
    ScaleAdjustment, ShapeQuery, Vector3, SHAPE_TOLERANCE,
};
pub use installation::{GameIcon, InstallationDescriptor};
