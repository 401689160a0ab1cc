//! Game installation discovery from Source engine `gameinfo.txt` files.
//!
//! The builder reads the `game "..."` declaration, cleans up the name Valve put in
//! it, works out the root and content directories and then looks for the model
//! compiler, model viewer and an icon next to it.
//!
//! # Examples
//!
//! ```ignore
//! use asset_identity::services::GameInfoBuilder;
//! use camino::Utf8Path;
//!
//! let info = GameInfoBuilder::new().build(Utf8Path::new("C:/Steam/Half-Life 2/hl2/gameinfo.txt"))?;
//! assert_eq!(info.game_name(), "Half-Life 2");
//! ```

use crate::models::{GameIcon, InstallationDescriptor, ResolverSettings};
use crate::services::icon::{AssociatedIconExtractor, IconExtractor, has_extension};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// File name every installation descriptor is built from
pub const GAMEINFO_FILE_NAME: &str = "gameinfo.txt";

/// Errors that can occur while building an [`InstallationDescriptor`]
#[derive(Error, Debug)]
pub enum GameInfoError {
    #[error("Expected gameinfo.txt file: {0}")]
    InvalidInput(String),

    #[error("Invalid gameinfo.txt file {0}: couldn't identify the name of the game")]
    MalformedConfig(Utf8PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),
}

/// Builds [`InstallationDescriptor`]s.
///
/// Holds the resolver settings and the icon extractor; a single builder can be
/// reused for any number of lookups and shared between threads.
pub struct GameInfoBuilder {
    settings: ResolverSettings,
    icon_extractor: Box<dyn IconExtractor + Send + Sync>,
}

impl Default for GameInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameInfoBuilder {
    pub fn new() -> Self {
        Self::with_settings(ResolverSettings::default())
    }

    pub fn with_settings(settings: ResolverSettings) -> Self {
        Self {
            settings,
            icon_extractor: Box::new(AssociatedIconExtractor),
        }
    }

    /// Replace the icon extractor, e.g. with one backed by the Windows shell
    pub fn with_icon_extractor<E>(mut self, extractor: E) -> Self
    where
        E: IconExtractor + Send + Sync + 'static,
    {
        self.icon_extractor = Box::new(extractor);
        self
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Build a descriptor from the `gameinfo.txt` at `path`.
    ///
    /// # Errors
    ///
    /// - [`GameInfoError::InvalidInput`] if the file is not named `gameinfo.txt`
    ///   or has no parent directories to resolve
    /// - [`GameInfoError::Io`] if the file or the install root cannot be read
    /// - [`GameInfoError::MalformedConfig`] if no `game` declaration is found
    pub fn build(&self, path: &Utf8Path) -> Result<InstallationDescriptor, GameInfoError> {
        if path.file_name() != Some(GAMEINFO_FILE_NAME) {
            return Err(GameInfoError::InvalidInput(path.to_string()));
        }

        let path = absolute_utf8(path)?;

        let bytes = fs::read(&path).map_err(|source| GameInfoError::Io {
            path: path.clone(),
            source,
        })?;
        let contents = decode_gameinfo(&bytes);

        let raw_name = extract_game_name(&contents)
            .ok_or_else(|| GameInfoError::MalformedConfig(path.clone()))?;
        let game_name = normalize_game_name(&raw_name);

        let mut game_directory = path
            .parent()
            .map(Utf8Path::to_path_buf)
            .ok_or_else(|| GameInfoError::InvalidInput(path.to_string()))?;
        let root_directory = game_directory
            .parent()
            .map(Utf8Path::to_path_buf)
            .ok_or_else(|| GameInfoError::InvalidInput(path.to_string()))?;
        let mut config_path = path;

        if let Some(preferred) = self.settings.preferred_directory(&game_name) {
            game_directory = root_directory.join(preferred);
            config_path = game_directory.join(GAMEINFO_FILE_NAME);
            tracing::debug!(
                "Redirecting {} to preferred directory {}",
                game_name,
                game_directory
            );
        }

        let bin_directory = root_directory.join("bin");
        let model_compiler_path = existing_file(bin_directory.join(&self.settings.model_compiler));
        let model_viewer_path = existing_file(bin_directory.join(&self.settings.model_viewer));

        let icon = self.resolve_icon(&game_directory, &root_directory)?;

        tracing::info!(
            "Detected game installation: {} (root={}, compiler={})",
            game_name,
            root_directory,
            model_compiler_path.is_some()
        );

        Ok(InstallationDescriptor {
            game_name,
            config_path,
            game_directory,
            root_directory,
            model_compiler_path,
            model_viewer_path,
            icon,
        })
    }

    fn resolve_icon(
        &self,
        game_directory: &Utf8Path,
        root_directory: &Utf8Path,
    ) -> Result<Option<GameIcon>, GameInfoError> {
        let game_ico = game_directory.join("resource").join("game.ico");
        if game_ico.is_file() {
            if let Some(icon) = self.icon_extractor.extract(&game_ico) {
                return Ok(Some(icon));
            }
        }

        let Some(candidate) = first_icon_candidate(root_directory)? else {
            tracing::debug!("No icon found for installation at {}", root_directory);
            return Ok(None);
        };

        Ok(self.icon_extractor.extract(&candidate))
    }
}

impl InstallationDescriptor {
    /// Build a descriptor with the default resolver settings.
    ///
    /// Shorthand for `GameInfoBuilder::new().build(path)`.
    pub fn from_config_file(path: &Utf8Path) -> Result<Self, GameInfoError> {
        GameInfoBuilder::new().build(path)
    }
}

/// Decodes `gameinfo.txt` bytes without rejecting the file.
///
/// Mod authors save these in whatever codepage their editor uses; bytes that are
/// not UTF-8 become U+FFFD and a leading byte order mark is dropped.
fn decode_gameinfo(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{FEFF}').unwrap_or(&*text).to_string()
}

/// Extracts the raw game name from `gameinfo.txt` contents.
///
/// Returns the first quoted value on the first line that starts with the `game`
/// key. Tabs and leading spaces are ignored and the key may itself be quoted.
/// Lines starting with `game` that carry no complete quoted value are skipped.
pub fn extract_game_name(contents: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.replace('\t', "");
        let line = line.trim_start_matches(' ').replace("\"game\"", "game");

        if !line.starts_with("game") {
            continue;
        }

        let Some(first_quote) = line.find('"') else {
            continue;
        };
        let value = &line[first_quote + 1..];

        if let Some(last_quote) = value.find('"') {
            return Some(value[..last_quote].to_string());
        }
    }

    None
}

/// Normalizes a game name for display.
///
/// Runs of three or more capitals are reduced to a leading capital
/// (`HALF-LIFE 2` → `Half-Life 2`), then the `[Beta]` tag is dropped and the
/// `Source` / `DM` suffixes get their colon. Applying it twice changes nothing.
pub fn normalize_game_name(raw: &str) -> String {
    let mut name = raw.to_string();

    // Dropping the beta tag can splice new capital runs together; repeat until stable.
    loop {
        let next = soften_capital_runs(&name).replace(" [Beta]", "");
        let next = insert_colon(&next, " Source", ": Source");
        let next = insert_colon(&next, " DM", ": Deathmatch");

        if next == name {
            return name;
        }
        name = next;
    }
}

fn soften_capital_runs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if c.is_ascii_uppercase() {
            run.push(c);
            continue;
        }
        flush_capital_run(&mut run, &mut result);
        result.push(c);
    }
    flush_capital_run(&mut run, &mut result);

    result
}

fn flush_capital_run(run: &mut String, out: &mut String) {
    if run.len() > 2 {
        out.push_str(&run[..1]);
        out.push_str(&run[1..].to_ascii_lowercase());
    } else {
        out.push_str(run);
    }
    run.clear();
}

/// Replaces `pattern` with `replacement` unless the match already follows a colon.
fn insert_colon(text: &str, pattern: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(index) = rest.find(pattern) {
        let (before, after) = rest.split_at(index);
        result.push_str(before);

        if result.ends_with(':') {
            result.push_str(pattern);
        } else {
            result.push_str(replacement);
        }
        rest = &after[pattern.len()..];
    }
    result.push_str(rest);

    result
}

fn absolute_utf8(path: &Utf8Path) -> Result<Utf8PathBuf, GameInfoError> {
    let absolute = std::path::absolute(path.as_std_path()).map_err(|source| GameInfoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Utf8PathBuf::from_path_buf(absolute).map_err(GameInfoError::NonUtf8Path)
}

fn existing_file(path: Utf8PathBuf) -> Option<Utf8PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        tracing::debug!("Optional file not found: {}", path);
        None
    }
}

/// First `.exe` or `.ico` directly under `root_directory`, by file name
fn first_icon_candidate(root_directory: &Utf8Path) -> Result<Option<Utf8PathBuf>, GameInfoError> {
    let entries = root_directory
        .read_dir_utf8()
        .map_err(|source| GameInfoError::Io {
            path: root_directory.to_path_buf(),
            source,
        })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GameInfoError::Io {
            path: root_directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file() && (has_extension(path, "exe") || has_extension(path, "ico")) {
            candidates.push(path.to_path_buf());
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates.into_iter().next())
}
