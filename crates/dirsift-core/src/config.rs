/// JSON configuration — the searchable-type list and output file paths.
///
/// The config file is created with defaults on first run, then loaded and
/// validated on every run. `searchable_types` is a JSON *array* rather
/// than an object so that configuration order — which doubles as the
/// category tie-break order — survives serialization.
use crate::error::ConfigError;
use crate::model::CategorySpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./dirsift.json";

/// Where the three output artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputPaths {
    /// Oversized file paths, one per line.
    pub bigfiles_output_path: PathBuf,
    /// Permission warnings, one per line, in visitation order.
    pub permissions_output_path: PathBuf,
    /// The rendered summary table when `--output` is used.
    pub analysis_output_path: PathBuf,
}

/// Validated application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub searchable_types: Vec<CategorySpec>,
    pub paths: OutputPaths,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            searchable_types: vec![
                CategorySpec::new("Image", "image/"),
                CategorySpec::new("Text", "text/"),
                CategorySpec::new("Audio", "audio/"),
                CategorySpec::new("Video", "video/"),
                CategorySpec::new("Application", "application/"),
            ],
            paths: OutputPaths {
                bigfiles_output_path: PathBuf::from("./bigfiles.txt"),
                permissions_output_path: PathBuf::from("./permissions.txt"),
                analysis_output_path: PathBuf::from("./output.txt"),
            },
        }
    }
}

impl Config {
    /// Load and validate the config at `path`, writing out the default
    /// config first when no file exists there yet.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("no config at {}, writing defaults", path.display());
            let default = Self::default();
            let body = serde_json::to_string_pretty(&default).expect("default config serializes");
            fs::write(path, body).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let body = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&body).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check category and path constraints. Run once at startup; the
    /// config is immutable input data afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.searchable_types.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        let mut seen = HashSet::new();
        for spec in &self.searchable_types {
            if spec.name.is_empty() || spec.prefix.is_empty() {
                return Err(ConfigError::EmptyField(spec.name.to_string()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateName(spec.name.to_string()));
            }
        }
        for path in [
            &self.paths.bigfiles_output_path,
            &self.paths.permissions_output_path,
            &self.paths.analysis_output_path,
        ] {
            check_writable(path)?;
        }
        Ok(())
    }
}

/// The directory holding an output path must exist and be writable, and an
/// already-present output file must not be read-only.
fn check_writable(path: &Path) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    match fs::metadata(&dir) {
        Err(_) => return Err(ConfigError::MissingOutputDirectory(path.to_path_buf())),
        Ok(meta) if meta.permissions().readonly() => {
            return Err(ConfigError::NotWritable(dir));
        }
        Ok(_) => {}
    }
    if let Ok(meta) = fs::metadata(path) {
        if meta.permissions().readonly() {
            return Err(ConfigError::NotWritable(path.to_path_buf()));
        }
    }
    Ok(())
}
