//! Head shape parameters and the classification they resolve to.
//!
//! A [`ShapeQuery`] carries the bevel parameters of the caller's mesh;
//! [`ReferenceShapeEntry`] rows are the curated shapes it is compared against.
//! The outcome is a [`HeadClassification`]: an [`AssetReference`] under
//! `Meshes/Heads` plus the [`ScaleAdjustment`] to apply to the mesh.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute tolerance used when comparing head shape parameters
pub const SHAPE_TOLERANCE: f64 = 0.001;

/// Root of the logical head mesh asset paths
pub const HEAD_ASSET_ROOT: &str = "Meshes/Heads";

/// Primitive class of a bevel-shaped head mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BevelFamily {
    Block,
    Cylinder,
}

impl fmt::Display for BevelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BevelFamily::Block => write!(f, "Block"),
            BevelFamily::Cylinder => write!(f, "Cylinder"),
        }
    }
}

/// Shape family reported by the caller's mesh.
///
/// `Block` and `Cylinder` are matched against the reference table. `Sphere` is
/// the special-mesh sphere. Anything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshFamily {
    Block,
    Cylinder,
    Sphere,
    Unknown,
}

impl MeshFamily {
    /// The table family this mesh competes in, if any
    pub fn bevel_family(self) -> Option<BevelFamily> {
        match self {
            MeshFamily::Block => Some(BevelFamily::Block),
            MeshFamily::Cylinder => Some(BevelFamily::Cylinder),
            MeshFamily::Sphere | MeshFamily::Unknown => None,
        }
    }
}

/// Shape parameters extracted from a head mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeQuery {
    pub family: MeshFamily,
    pub bevel: f64,
    pub roundness: f64,
    pub bulge: f64,
}

impl ShapeQuery {
    pub fn new(family: MeshFamily, bevel: f64, roundness: f64, bulge: f64) -> Self {
        Self {
            family,
            bevel,
            roundness,
            bulge,
        }
    }

    /// Query for a sphere-shaped special mesh; bevel parameters are irrelevant
    pub fn sphere() -> Self {
        Self::new(MeshFamily::Sphere, 0.0, 0.0, 0.0)
    }
}

/// One curated head shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceShapeEntry {
    pub family: BevelFamily,
    pub bevel: f64,
    pub roundness: f64,
    pub bulge: f64,
    pub asset_name: &'static str,
}

impl ReferenceShapeEntry {
    pub const fn new(
        family: BevelFamily,
        bevel: f64,
        roundness: f64,
        bulge: f64,
        asset_name: &'static str,
    ) -> Self {
        Self {
            family,
            bevel,
            roundness,
            bulge,
            asset_name,
        }
    }

    /// Whether all three scalar fields lie within [`SHAPE_TOLERANCE`] of the query
    pub fn fields_match(&self, query: &ShapeQuery) -> bool {
        fuzzy_eq(self.bevel, query.bevel)
            && fuzzy_eq(self.roundness, query.roundness)
            && fuzzy_eq(self.bulge, query.bulge)
    }
}

/// Whether `a` and `b` differ by less than [`SHAPE_TOLERANCE`]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (b - a).abs() < SHAPE_TOLERANCE
}

/// Per-axis scale of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// What the caller should do to the classified mesh's scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScaleAdjustment {
    /// Identified shape: the canonical asset already carries its proportions
    ResetToUnit,
    /// Unidentified shape: divide every axis by the factor
    ScaleDown(f32),
}

impl ScaleAdjustment {
    /// Factor applied to unclassified heads
    pub const DEFAULT_SHRINK: f32 = 1.25;

    pub fn apply(self, scale: Vector3) -> Vector3 {
        match self {
            ScaleAdjustment::ResetToUnit => Vector3::ONE,
            ScaleAdjustment::ScaleDown(factor) => {
                Vector3::new(scale.x / factor, scale.y / factor, scale.z / factor)
            }
        }
    }
}

/// Logical resource path understood by the asset loader, e.g. `Meshes/Heads/Hex.mesh`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetReference(String);

impl AssetReference {
    pub fn head_mesh(asset_name: &str) -> Self {
        Self(format!("{}/{}.mesh", HEAD_ASSET_ROOT, asset_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of classifying a head mesh
#[derive(Debug, Clone, PartialEq)]
pub struct HeadClassification {
    pub asset_name: String,
    pub asset: AssetReference,
    pub scale: ScaleAdjustment,
}
