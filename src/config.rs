//! Configuration file support for patch-recon.
//!
//! Provides YAML-based configuration through `patch-recon.config.yml`
//! files: the tenancy table (which update/compliance gateway pair to talk
//! to), default data directories, and source timeouts.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "patch-recon.config.yml";

/// One tenancy: the pair of inventory gateways for a managed domain.
#[derive(Debug, Clone, Deserialize)]
pub struct Tenancy {
    pub wsus_url: String,
    pub sccm_url: String,
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub default_tenancy: Option<String>,
    pub catalog_dir: Option<PathBuf>,
    pub descriptor_dir: Option<PathBuf>,
    pub source_timeout_secs: Option<u64>,
    #[serde(default)]
    pub tenancies: HashMap<String, Tenancy>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Resolves the tenancy to use: the explicitly requested one, falling
    /// back to the configured default. Returns `None` when neither is set
    /// (the caller must then supply gateway URLs directly).
    pub fn resolve_tenancy(&self, requested: Option<&str>) -> Result<Option<&Tenancy>> {
        let name = match requested.or(self.default_tenancy.as_deref()) {
            Some(name) => name,
            None => return Ok(None),
        };

        match self.tenancies.get(name) {
            Some(tenancy) => Ok(Some(tenancy)),
            None => bail!(
                "Tenancy \"{}\" is not defined in the config file.\n\n💡 Hint: Available tenancies: {}",
                name,
                if self.tenancies.is_empty() {
                    "(none)".to_string()
                } else {
                    let mut names: Vec<&str> =
                        self.tenancies.keys().map(String::as_str).collect();
                    names.sort_unstable();
                    names.join(", ")
                }
            ),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (name, tenancy) in &config.tenancies {
        if tenancy.wsus_url.trim().is_empty() {
            bail!(
                "Invalid config: tenancies.{}.wsus_url must not be empty.",
                name
            );
        }
        if tenancy.sccm_url.trim().is_empty() {
            bail!(
                "Invalid config: tenancies.{}.sccm_url must not be empty.",
                name
            );
        }
    }

    if let Some(default) = &config.default_tenancy {
        if !config.tenancies.contains_key(default) {
            bail!(
                "Invalid config: default_tenancy \"{}\" is not defined under tenancies.",
                default
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
