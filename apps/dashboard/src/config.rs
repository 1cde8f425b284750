use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Deserialize;

use crate::ui::{labels::Locale, theme::ThemePreset};

pub const CONFIG_FILE_NAME: &str = "dashboard.toml";
const CONFIG_DIR_NAME: &str = "factory_dashboard";

#[derive(Parser, Debug, Default)]
#[command(name = "dashboard", about = "Factory staffing dashboard")]
pub struct Cli {
    /// Path to a dashboard.toml configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Roster JSON file to start from instead of the sample roster.
    #[arg(long)]
    pub roster: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,
    #[arg(long, value_enum)]
    pub theme: Option<ThemePreset>,
    /// Default tracing filter when RUST_LOG is unset.
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// Startup settings after layering defaults, file, environment and flags.
/// `locale` and `theme` stay unset unless configured, so persisted UI
/// choices can fill them in.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub roster_path: Option<PathBuf>,
    pub locale: Option<Locale>,
    pub theme: Option<ThemePreset>,
    pub log_filter: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            locale: None,
            theme: None,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    roster_path: Option<PathBuf>,
    locale: Option<String>,
    theme: Option<String>,
    log_filter: Option<String>,
}

pub fn load_startup_config(
    cli: &Cli,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<StartupConfig> {
    let mut config = StartupConfig::default();

    if let Some(path) = resolve_config_path(cli.config.as_deref())? {
        apply_file(&mut config, &path)?;
    }
    apply_env(&mut config, env)?;
    apply_cli(&mut config, cli);

    Ok(config)
}

fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(anyhow!("config file '{}' not found", path.display()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file()))
}

fn apply_file(config: &mut StartupConfig, path: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let file_cfg: FileConfig = toml::from_str(&raw)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;

    if let Some(roster_path) = file_cfg.roster_path {
        // Relative roster paths are resolved against the config file.
        config.roster_path = Some(match path.parent() {
            Some(parent) if roster_path.is_relative() => parent.join(roster_path),
            _ => roster_path,
        });
    }
    if let Some(v) = file_cfg.locale {
        config.locale = Some(parse_locale(&v).with_context(|| format!("in '{}'", path.display()))?);
    }
    if let Some(v) = file_cfg.theme {
        config.theme = Some(parse_theme(&v).with_context(|| format!("in '{}'", path.display()))?);
    }
    if let Some(v) = file_cfg.log_filter {
        config.log_filter = v;
    }
    Ok(())
}

fn apply_env(
    config: &mut StartupConfig,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("DASHBOARD__ROSTER") {
        config.roster_path = Some(PathBuf::from(v));
    }
    if let Some(v) = non_empty("DASHBOARD__LOCALE") {
        config.locale = Some(parse_locale(&v).context("in DASHBOARD__LOCALE")?);
    }
    if let Some(v) = non_empty("DASHBOARD__THEME") {
        config.theme = Some(parse_theme(&v).context("in DASHBOARD__THEME")?);
    }
    if let Some(v) = non_empty("DASHBOARD__LOG") {
        config.log_filter = v;
    }
    Ok(())
}

fn apply_cli(config: &mut StartupConfig, cli: &Cli) {
    if let Some(v) = &cli.roster {
        config.roster_path = Some(v.clone());
    }
    if let Some(v) = cli.locale {
        config.locale = Some(v);
    }
    if let Some(v) = cli.theme {
        config.theme = Some(v);
    }
    if let Some(v) = &cli.log_filter {
        config.log_filter = v.clone();
    }
}

fn parse_locale(raw: &str) -> anyhow::Result<Locale> {
    Locale::parse(raw).ok_or_else(|| anyhow!("unknown locale '{raw}' (expected 'ja' or 'en')"))
}

fn parse_theme(raw: &str) -> anyhow::Result<ThemePreset> {
    ThemePreset::parse(raw)
        .ok_or_else(|| anyhow!("unknown theme '{raw}' (expected 'light' or 'dark')"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
