//! # DocSnip Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates DocSnip configuration. Configuration
//! only affects presentation: the syntax theme used by the delegated
//! highlighter, the default for line numbers, and the colors assigned to the
//! shell emphasis classes in standalone pages.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.docsnip.toml` in the current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory, or the file
//!    named by `DOCSNIP_CONFIG` when that variable is set
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [render]
//! theme = "InspiredGitHub"
//! show_line_numbers = false
//!
//! [palette]
//! flag = "#ffcc00"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let delegate = SyntectDelegate::new(&cfg.render.theme)?;
//! ```
//!
use crate::core::error::{DocsnipError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Effective configuration after layering user and project files over the defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub render: RenderConfig,
    pub palette: Palette,
}

/// Rendering defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Name of a bundled syntect theme used for delegated snippets.
    pub theme: String,
    /// Line numbers for snippets that do not say otherwise.
    pub show_line_numbers: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_line_numbers: default_show_line_numbers(),
        }
    }
}

/// Colors for the five shell emphasis classes, emitted into the page stylesheet.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Palette {
    pub program: String,
    pub subcommand: String,
    pub version: String,
    pub string: String,
    pub flag: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            program: default_program_color(),
            subcommand: default_subcommand_color(),
            version: default_version_color(),
            string: default_string_color(),
            flag: default_flag_color(),
        }
    }
}

/// One configuration file as written. Absent keys stay `None` so a layer
/// that sets a value equal to the default still overrides the layer below.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct ConfigLayer {
    render: RenderLayer,
    palette: PaletteLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct RenderLayer {
    theme: Option<String>,
    show_line_numbers: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct PaletteLayer {
    program: Option<String>,
    subcommand: Option<String>,
    version: Option<String>,
    string: Option<String>,
    flag: Option<String>,
}

impl Palette {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("program", &self.program),
            ("subcommand", &self.subcommand),
            ("version", &self.version),
            ("string", &self.string),
            ("flag", &self.flag),
        ]
    }
}

fn default_theme() -> String {
    "base16-ocean.dark".to_string()
}
fn default_show_line_numbers() -> bool {
    true
}
fn default_program_color() -> String {
    "#569cd6".to_string()
}
fn default_subcommand_color() -> String {
    "#4ec9b0".to_string()
}
fn default_version_color() -> String {
    "#ce9178".to_string()
}
fn default_string_color() -> String {
    "#d69d85".to_string()
}
fn default_flag_color() -> String {
    "#9cdcfe".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".docsnip.toml";
const CONFIG_ENV_VAR: &str = "DOCSNIP_CONFIG";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(explicit);
        info!(
            "Loading configuration from {}: {}",
            CONFIG_ENV_VAR,
            path.display()
        );
        return load_config_from_path(&path).map(Some);
    }
    if let Some(proj_dirs) = ProjectDirs::from("com", "DocSnip", "docsnip") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.docsnip.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Resolves each key as project, then user, then built-in default.
fn merge_configs(user: ConfigLayer, project: Option<ConfigLayer>) -> Config {
    let project = project.unwrap_or_default();
    Config {
        render: RenderConfig {
            theme: project
                .render
                .theme
                .or(user.render.theme)
                .unwrap_or_else(default_theme),
            show_line_numbers: project
                .render
                .show_line_numbers
                .or(user.render.show_line_numbers)
                .unwrap_or_else(default_show_line_numbers),
        },
        palette: Palette {
            program: project
                .palette
                .program
                .or(user.palette.program)
                .unwrap_or_else(default_program_color),
            subcommand: project
                .palette
                .subcommand
                .or(user.palette.subcommand)
                .unwrap_or_else(default_subcommand_color),
            version: project
                .palette
                .version
                .or(user.palette.version)
                .unwrap_or_else(default_version_color),
            string: project
                .palette
                .string
                .or(user.palette.string)
                .unwrap_or_else(default_string_color),
            flag: project
                .palette
                .flag
                .or(user.palette.flag)
                .unwrap_or_else(default_flag_color),
        },
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.render.theme.trim().is_empty() {
        return Err(anyhow!(DocsnipError::Config(
            "render.theme cannot be empty.".to_string()
        )));
    }
    for (name, color) in config.palette.entries() {
        if !is_hex_color(color) {
            return Err(anyhow!(DocsnipError::Config(format!(
                "Invalid color for palette.{}: '{}'. Expected #RGB or #RRGGBB.",
                name, color
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
