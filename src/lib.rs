// asset-identity - Game installation discovery and head mesh classification
//
// Library crate used by the Rbx2Source conversion pipeline to work out which game
// it is compiling for and which canonical head mesh a character wears.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{HeadClassification, InstallationDescriptor, ResolverSettings, ShapeQuery};
pub use services::{GameInfoBuilder, HeadShapeClassifier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
