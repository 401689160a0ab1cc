use camino::{Utf8Path, Utf8PathBuf};
use image::RgbaImage;

/// Icon resolved for a game installation.
///
/// `path` is the file the icon was taken from. `image` holds decoded pixels when
/// the source is an `.ico` file; icons embedded in executables are left for the
/// consuming pipeline to pull out of the PE resources.
#[derive(Debug, Clone, PartialEq)]
pub struct GameIcon {
    pub path: Utf8PathBuf,
    pub image: Option<RgbaImage>,
}

/// Resolved description of a Source engine game installation.
///
/// Built by [`GameInfoBuilder`](crate::services::GameInfoBuilder) from a
/// `gameinfo.txt` file. A descriptor is never handed out half-built: either every
/// required field is set or construction fails with a
/// [`GameInfoError`](crate::services::GameInfoError).
///
/// # Layout
///
/// ```text
/// <root_directory>/
///   bin/studiomdl.exe          -> model_compiler_path
///   bin/hlmv.exe               -> model_viewer_path
///   <game_directory>/
///     gameinfo.txt             -> config_path
///     resource/game.ico        -> icon
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InstallationDescriptor {
    pub(crate) game_name: String,
    pub(crate) config_path: Utf8PathBuf,
    pub(crate) game_directory: Utf8PathBuf,
    pub(crate) root_directory: Utf8PathBuf,
    pub(crate) model_compiler_path: Option<Utf8PathBuf>,
    pub(crate) model_viewer_path: Option<Utf8PathBuf>,
    pub(crate) icon: Option<GameIcon>,
}

impl InstallationDescriptor {
    /// Normalized display name, e.g. `Half-Life 2: Deathmatch`
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// The `gameinfo.txt` the descriptor resolves to
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }

    pub fn game_directory(&self) -> &Utf8Path {
        &self.game_directory
    }

    pub fn root_directory(&self) -> &Utf8Path {
        &self.root_directory
    }

    pub fn model_compiler_path(&self) -> Option<&Utf8Path> {
        self.model_compiler_path.as_deref()
    }

    pub fn model_viewer_path(&self) -> Option<&Utf8Path> {
        self.model_viewer_path.as_deref()
    }

    pub fn icon(&self) -> Option<&GameIcon> {
        self.icon.as_ref()
    }

    /// Whether models can be compiled for this installation
    pub fn is_ready_to_use(&self) -> bool {
        self.model_compiler_path.is_some()
    }
}
