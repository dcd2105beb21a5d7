//! Generator configuration.
//!
//! Loaded from an optional `pseo.toml` in the project root. Stock defaults
//! are the base layer; the file only needs the keys it wants to change:
//!
//! ```toml
//! [site]
//! base_url = "https://kangaroohousing.in"   # Prefix for canonical links and sitemap <loc>
//! brand = "Kangaroo House"                  # Appended to every page title
//! stylesheet = "/pages/seo/seo-pages.css"
//! # gtm_id = "GTM-XXXXXXX"                  # Tag Manager container (omit to skip)
//! # ga_id = "G-XXXXXXXXXX"                  # gtag measurement id (omit to skip)
//!
//! [paths]                                   # Relative to the project root
//! data_dir = "pseo/data"
//! output_dir = "pages/seo"
//! sitemap = "sitemap.xml"
//! manifest = "pseo/generated-pages-manifest.json"
//!
//! [linking]
//! max_links = 8                             # Related pages per page
//!
//! [validation]
//! min_content_length = 5000                 # UTF-16 units of HTML
//! min_glossary_length = 3000
//! min_internal_links = 3
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "pseo.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub paths: PathsConfig,
    pub linking: LinkingConfig,
    pub validation: ValidationConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "site.base_url must not be empty".into(),
            ));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/'".into(),
            ));
        }
        if self.linking.max_links == 0 {
            return Err(ConfigError::Validation(
                "linking.max_links must be at least 1".into(),
            ));
        }
        if self.validation.min_content_length == 0 || self.validation.min_glossary_length == 0 {
            return Err(ConfigError::Validation(
                "validation content lengths must be non-zero".into(),
            ));
        }
        if self.validation.min_internal_links == 0 {
            return Err(ConfigError::Validation(
                "validation.min_internal_links must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Site identity used in page heads, titles and the sitemap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Absolute origin, no trailing slash.
    pub base_url: String,
    /// Brand suffix for page titles (`… | Kangaroo House`).
    pub brand: String,
    /// Stylesheet linked from every generated page.
    pub stylesheet: String,
    /// Google Tag Manager container id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtm_id: Option<String>,
    /// gtag.js measurement id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ga_id: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: "https://kangaroohousing.in".to_string(),
            brand: "Kangaroo House".to_string(),
            stylesheet: "/pages/seo/seo-pages.css".to_string(),
            gtm_id: None,
            ga_id: None,
        }
    }
}

/// Input and output locations, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sitemap: PathBuf,
    pub manifest: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("pseo/data"),
            output_dir: PathBuf::from("pages/seo"),
            sitemap: PathBuf::from("sitemap.xml"),
            manifest: PathBuf::from("pseo/generated-pages-manifest.json"),
        }
    }
}

impl PathsConfig {
    /// Resolve every path against `root`. Absolute paths are kept as-is.
    pub fn resolve(&self, root: &Path) -> PathsConfig {
        PathsConfig {
            data_dir: root.join(&self.data_dir),
            output_dir: root.join(&self.output_dir),
            sitemap: root.join(&self.sitemap),
            manifest: root.join(&self.manifest),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkingConfig {
    /// Maximum related pages rendered per page.
    pub max_links: usize,
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            max_links: crate::linker::DEFAULT_MAX_LINKS,
        }
    }
}

/// Quality-gate thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Minimum HTML length, in UTF-16 code units, for every playbook except
    /// glossary.
    pub min_content_length: usize,
    /// Minimum HTML length for glossary pages.
    pub min_glossary_length: usize,
    pub min_internal_links: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_content_length: 5000,
            min_glossary_length: 3000,
            min_internal_links: 3,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a TOML table, the base layer for user overrides.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load the config file at `path`.
///
/// A missing file yields the stock defaults. A present file is merged over
/// the defaults, checked for unknown keys, and validated.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = if path.exists() {
        let content = fs::read_to_string(path)?;
        let overlay: toml::Value = toml::from_str(&content)?;
        merge_toml(base, overlay)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        base
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// A fully commented stock `pseo.toml`, printed by `--print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# pSEO generator configuration
# =============================
# All settings are optional. Values shown are the defaults.
# Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Origin used for canonical links and sitemap <loc> entries. No trailing slash.
base_url = "https://kangaroohousing.in"

# Suffix for every page title: "PG near Ashok Nagar, Delhi | Kangaroo House".
brand = "Kangaroo House"

# Stylesheet linked from every generated page.
stylesheet = "/pages/seo/seo-pages.css"

# Analytics snippets are only rendered when an id is set.
# gtm_id = "GTM-XXXXXXX"
# ga_id = "G-XXXXXXXXXX"

# ---------------------------------------------------------------------------
# Paths (relative to the project root)
# ---------------------------------------------------------------------------
[paths]
data_dir = "pseo/data"
output_dir = "pages/seo"
sitemap = "sitemap.xml"
manifest = "pseo/generated-pages-manifest.json"

# ---------------------------------------------------------------------------
# Internal linking
# ---------------------------------------------------------------------------
[linking]
# Related pages rendered at the bottom of each page.
max_links = 8

# ---------------------------------------------------------------------------
# Validation (warnings only, pages are still written)
# ---------------------------------------------------------------------------
[validation]
# Page length floors, in UTF-16 code units of the final HTML.
min_content_length = 5000
min_glossary_length = 3000
min_internal_links = 3
"##
}
