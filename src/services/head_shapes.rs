//! Head mesh classification against the curated set of classic Roblox heads.
//!
//! Bevel-shaped heads (blocks and cylinders) are matched field by field against
//! [`REFERENCE_HEADS`] within [`SHAPE_TOLERANCE`](crate::models::SHAPE_TOLERANCE).
//! Spheres are always `Perfection`. Anything else falls back to `Default`, which
//! is shrunk by 1.25 on every axis instead of being reset to unit scale.

use crate::models::{
    AssetReference, BevelFamily, HeadClassification, MeshFamily, ReferenceShapeEntry,
    ScaleAdjustment, ShapeQuery,
};
use thiserror::Error;

use crate::models::BevelFamily::{Block, Cylinder};

/// Asset used when no curated head matches
pub const DEFAULT_HEAD: &str = "Default";

/// Asset used for sphere-shaped heads
pub const SPHERE_HEAD: &str = "Perfection";

/// Curated head shapes: family, bevel, roundness, bulge, asset name.
///
/// Scanned in declaration order; the first row within tolerance wins.
pub static REFERENCE_HEADS: &[ReferenceShapeEntry] = &[
    ReferenceShapeEntry::new(Block, 0.00, 0.00, 0.00, "Blockhead"),
    ReferenceShapeEntry::new(Block, 0.50, 0.00, 0.00, "Hex"),
    ReferenceShapeEntry::new(Block, 0.30, 0.00, 0.00, "Octoblox"),
    ReferenceShapeEntry::new(Block, 0.05, 0.00, 0.00, "Roll"),
    ReferenceShapeEntry::new(Cylinder, 0.00, 0.00, 0.50, "Barrel"),
    ReferenceShapeEntry::new(Cylinder, 0.10, 0.00, 0.50, "Cool Thing"),
    ReferenceShapeEntry::new(Cylinder, 0.40, 0.00, 0.00, "Cylinder Madness"),
    ReferenceShapeEntry::new(Cylinder, 0.66, 0.00, 0.50, "Diamond"),
    ReferenceShapeEntry::new(Cylinder, 0.00, 0.00, 0.00, "Eraser Head"),
    ReferenceShapeEntry::new(Cylinder, 0.00, 0.00, 1.00, "Fat Head"),
    ReferenceShapeEntry::new(Cylinder, 0.20, 0.00, 1.00, "Flat Top"),
    ReferenceShapeEntry::new(Cylinder, 0.40, 1.00, 0.00, "Roundy"),
    ReferenceShapeEntry::new(Cylinder, 0.20, 0.00, 0.50, "ROX BOX"),
    ReferenceShapeEntry::new(Cylinder, 0.10, 0.00, 0.00, "Trim"),
];

/// Errors that can occur during classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Reference table has no {0} heads")]
    InvariantViolation(BevelFamily),
}

/// Classifies head meshes against a reference table.
#[derive(Debug, Clone, Copy)]
pub struct HeadShapeClassifier {
    table: &'static [ReferenceShapeEntry],
}

impl Default for HeadShapeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadShapeClassifier {
    /// Classifier over [`REFERENCE_HEADS`]
    pub fn new() -> Self {
        Self::with_table(REFERENCE_HEADS)
    }

    pub fn with_table(table: &'static [ReferenceShapeEntry]) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static [ReferenceShapeEntry] {
        self.table
    }

    /// Resolve the canonical head asset for `query`.
    ///
    /// Every well-formed query gets an asset; unmatched shapes become
    /// [`DEFAULT_HEAD`].
    ///
    /// # Errors
    ///
    /// [`ClassifierError::InvariantViolation`] if the table has no rows at all for
    /// the query's bevel family.
    pub fn classify(&self, query: &ShapeQuery) -> Result<HeadClassification, ClassifierError> {
        let asset_name = match query.family.bevel_family() {
            Some(family) => self.match_bevel(family, query)?,
            None if query.family == MeshFamily::Sphere => Some(SPHERE_HEAD),
            None => None,
        };

        let classification = match asset_name {
            Some(name) => HeadClassification {
                asset_name: name.to_string(),
                asset: AssetReference::head_mesh(name),
                scale: ScaleAdjustment::ResetToUnit,
            },
            None => HeadClassification {
                asset_name: DEFAULT_HEAD.to_string(),
                asset: AssetReference::head_mesh(DEFAULT_HEAD),
                scale: ScaleAdjustment::ScaleDown(ScaleAdjustment::DEFAULT_SHRINK),
            },
        };

        tracing::debug!(
            "Classified {:?} head as {}",
            query.family,
            classification.asset
        );
        Ok(classification)
    }

    fn match_bevel(
        &self,
        family: BevelFamily,
        query: &ShapeQuery,
    ) -> Result<Option<&'static str>, ClassifierError> {
        let mut candidates = self
            .table
            .iter()
            .filter(|entry| entry.family == family)
            .peekable();

        if candidates.peek().is_none() {
            return Err(ClassifierError::InvariantViolation(family));
        }

        Ok(candidates
            .find(|entry| entry.fields_match(query))
            .map(|entry| entry.asset_name))
    }
}

/// Classify `query` against [`REFERENCE_HEADS`]
pub fn classify_head(query: &ShapeQuery) -> Result<HeadClassification, ClassifierError> {
    HeadShapeClassifier::new().classify(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    static BLOCK_ONLY: &[ReferenceShapeEntry] =
        &[ReferenceShapeEntry::new(Block, 0.25, 0.0, 0.0, "Quarter")];

    static SHADOWED: &[ReferenceShapeEntry] = &[
        ReferenceShapeEntry::new(Block, 0.1000, 0.0, 0.0, "First"),
        ReferenceShapeEntry::new(Block, 0.1004, 0.0, 0.0, "Second"),
    ];

    #[test]
    fn test_exact_match() {
        let result = classify_head(&ShapeQuery::new(MeshFamily::Block, 0.5, 0.0, 0.0)).unwrap();
        assert_eq!(result.asset_name, "Hex");
        assert_eq!(result.asset.as_str(), "Meshes/Heads/Hex.mesh");
        assert_eq!(result.scale, ScaleAdjustment::ResetToUnit);
    }

    #[test]
    fn test_family_separates_identical_parameters() {
        let block = classify_head(&ShapeQuery::new(MeshFamily::Block, 0.0, 0.0, 0.0)).unwrap();
        let cylinder =
            classify_head(&ShapeQuery::new(MeshFamily::Cylinder, 0.0, 0.0, 0.0)).unwrap();

        assert_eq!(block.asset_name, "Blockhead");
        assert_eq!(cylinder.asset_name, "Eraser Head");
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let classifier = HeadShapeClassifier::with_table(SHADOWED);
        let result = classifier
            .classify(&ShapeQuery::new(MeshFamily::Block, 0.1002, 0.0, 0.0))
            .unwrap();
        assert_eq!(result.asset_name, "First");
    }

    #[test]
    fn test_missing_family_is_invariant_violation() {
        let classifier = HeadShapeClassifier::with_table(BLOCK_ONLY);
        let result = classifier.classify(&ShapeQuery::new(MeshFamily::Cylinder, 0.0, 0.0, 0.0));
        assert_eq!(
            result,
            Err(ClassifierError::InvariantViolation(BevelFamily::Cylinder))
        );
    }

    #[test]
    fn test_sphere_and_unknown_ignore_table() {
        let classifier = HeadShapeClassifier::with_table(&[]);

        let sphere = classifier.classify(&ShapeQuery::sphere()).unwrap();
        assert_eq!(sphere.asset_name, "Perfection");
        assert_eq!(sphere.scale, ScaleAdjustment::ResetToUnit);

        let unknown = classifier
            .classify(&ShapeQuery::new(MeshFamily::Unknown, 0.5, 0.0, 0.0))
            .unwrap();
        assert_eq!(unknown.asset_name, "Default");
        assert_eq!(unknown.scale, ScaleAdjustment::ScaleDown(1.25));
    }
}
