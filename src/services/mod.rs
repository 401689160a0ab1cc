//! Services module - Pure asset identity resolution.
//!
//! The services are framework-agnostic and independent of each other: nothing
//! here holds mutable state, so either can be called from any number of threads.
//!
//! # Components
//!
//! - [`GameInfoBuilder`]: Builds an [`InstallationDescriptor`](crate::models::InstallationDescriptor)
//!   from a `gameinfo.txt`:
//!   - Extracting and normalizing the game name
//!   - Resolving the game and root directories, with preferred-directory redirects
//!   - Probing `bin/` for the model compiler and viewer
//!   - Locating an icon through an [`IconExtractor`]
//!
//! - [`HeadShapeClassifier`]: Maps bevel parameters of a head mesh onto one of the
//!   curated heads in [`REFERENCE_HEADS`], falling back to `Default`.
//!
//! # Usage Example
//!
//! ```ignore
//! use asset_identity::models::{MeshFamily, ShapeQuery};
//! use asset_identity::services::classify_head;
//!
//! let head = classify_head(&ShapeQuery::new(MeshFamily::Block, 0.5, 0.0, 0.0))?;
//! assert_eq!(head.asset.as_str(), "Meshes/Heads/Hex.mesh");
//! ```

pub mod game_info;
pub mod head_shapes;
pub mod icon;

pub use game_info::{
    GAMEINFO_FILE_NAME, GameInfoBuilder, GameInfoError, extract_game_name, normalize_game_name,
};
pub use head_shapes::{
    ClassifierError, DEFAULT_HEAD, HeadShapeClassifier, REFERENCE_HEADS, SPHERE_HEAD,
    classify_head,
};
pub use icon::{AssociatedIconExtractor, IconExtractor};
