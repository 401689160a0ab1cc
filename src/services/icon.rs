//! Icon extraction for game installations.
//!
//! The builder only decides *which* file an icon should come from; turning that
//! file into a [`GameIcon`] goes through [`IconExtractor`] so pipelines with access
//! to platform shell APIs can swap in their own implementation.

use crate::models::GameIcon;
use camino::Utf8Path;

/// Turns an icon-bearing file into a [`GameIcon`].
#[cfg_attr(test, mockall::automock)]
pub trait IconExtractor {
    /// Returns `None` when the file holds no usable icon.
    fn extract(&self, path: &Utf8Path) -> Option<GameIcon>;
}

/// Default extractor.
///
/// `.ico` files are decoded with the `image` crate. Executables are recorded by
/// path only, since their icons live in PE resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssociatedIconExtractor;

impl IconExtractor for AssociatedIconExtractor {
    fn extract(&self, path: &Utf8Path) -> Option<GameIcon> {
        if !has_extension(path, "ico") {
            tracing::debug!("Using executable as icon source: {}", path);
            return Some(GameIcon {
                path: path.to_path_buf(),
                image: None,
            });
        }

        match image::open(path.as_std_path()) {
            Ok(decoded) => Some(GameIcon {
                path: path.to_path_buf(),
                image: Some(decoded.to_rgba8()),
            }),
            Err(e) => {
                tracing::warn!("Failed to decode icon {}: {}", path, e);
                None
            }
        }
    }
}

/// ASCII case-insensitive extension check
pub(crate) fn has_extension(path: &Utf8Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
