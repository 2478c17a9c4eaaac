use std::env;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AppTheme {
    Ocean,
    Eighties,
    Solarized,
    Monokai,
}

impl AppTheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ocean => "Ocean",
            Self::Eighties => "Eighties",
            Self::Solarized => "Solarized",
            Self::Monokai => "Monokai",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub theme: AppTheme,
    pub color: ColorChoice,
    pub syntax_highlight: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            theme: AppTheme::Ocean,
            color: ColorChoice::Auto,
            syntax_highlight: true,
        }
    }
}

pub fn load() -> Result<RenderSettings> {
    let Some(config_path) = config_file_path() else {
        return Ok(RenderSettings::default());
    };

    if !config_path.exists() {
        return Ok(RenderSettings::default());
    }

    load_from(&config_path)
}

pub fn load_from(config_path: &Path) -> Result<RenderSettings> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read settings at `{}`", config_path.display()))?;
    let settings: RenderSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings at `{}`", config_path.display()))?;

    log::debug!("loaded settings from {}", config_path.display());
    Ok(settings)
}

pub fn config_file_path() -> Option<PathBuf> {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("difline").join("config.toml"));
    }

    env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("difline")
            .join("config.toml")
    })
}
