use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, anyhow};
use collate_core::{ComparatorBuilder, ComparatorChain, ComparatorError};
use collate_model::{SortFields, WktDefaults, WktParser};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "COLLATE_CONFIG_PATH";
/// Environment variable holding an inline JSON config.
pub const CONFIG_JSON_VAR: &str = "COLLATE_CONFIG_JSON";
/// Files looked for below the search root, first match wins.
pub const DEFAULT_FILES: [&str; 3] = ["collate.toml", "collate.json", "config/collate.toml"];

/// Where a comparator configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Nothing was configured; built-in defaults apply.
    #[default]
    Default,
    /// File named by `$COLLATE_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON document held by `$COLLATE_CONFIG_JSON`.
    EnvInline(String),
    /// One of the [`DEFAULT_FILES`].
    File(PathBuf),
}

impl ConfigSource {
    /// Pick the first available source.
    ///
    /// `$COLLATE_CONFIG_PATH` wins over `$COLLATE_CONFIG_JSON`, which wins
    /// over the [`DEFAULT_FILES`] below `root`. Blank variables count as
    /// unset. Nothing is read or parsed here.
    pub fn locate<F>(lookup: F, root: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(path) = var(CONFIG_PATH_VAR) {
            Self::EnvPath(PathBuf::from(path))
        } else if let Some(json) = var(CONFIG_JSON_VAR) {
            Self::EnvInline(json)
        } else {
            DEFAULT_FILES
                .iter()
                .map(|name| root.join(name))
                .find(|path| path.is_file())
                .map_or(Self::Default, Self::File)
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("built-in defaults"),
            Self::EnvPath(path) => write!(f, "${CONFIG_PATH_VAR} ({})", path.display()),
            Self::EnvInline(_) => write!(f, "${CONFIG_JSON_VAR}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML, the format of `collate.toml`.
    Toml,
    /// JSON, also accepted inline through the environment.
    Json,
}

impl ConfigFormat {
    /// Format named by the file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// Deserialize `contents` in this format.
    pub fn parse(self, contents: &str) -> anyhow::Result<ComparatorConfig> {
        let config = match self {
            Self::Toml => toml::from_str(contents)?,
            Self::Json => serde_json::from_str(contents)?,
        };
        Ok(config)
    }
}

/// Parser defaults and named sort presets.
///
/// ```toml
/// [defaults]
/// asc = true
/// ignore_case = false
///
/// [presets]
/// people = "lastName|firstName|age,desc"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Flags used for parts a well-known-text description leaves out.
    pub defaults: WktDefaults,
    /// Preset name to well-known text.
    pub presets: BTreeMap<String, String>,
}

impl ComparatorConfig {
    /// Load from the process environment, searching default files in the
    /// working directory. See [`ConfigSource::locate`] for the order.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Load with variables read through `lookup` and default files searched
    /// below `root`.
    pub fn load_with<F>(lookup: F, root: &Path) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = ConfigSource::locate(lookup, root);
        let config = Self::load_from(&source)?;
        info!(%source, presets = config.presets.len(), "loaded comparator config");
        Ok((config, source))
    }

    /// Read the configuration `source` points at and validate its presets.
    pub fn load_from(source: &ConfigSource) -> anyhow::Result<Self> {
        let loaded = match source {
            ConfigSource::Default => Ok(Self::default()),
            ConfigSource::EnvPath(path) | ConfigSource::File(path) => Self::load_from_file(path),
            ConfigSource::EnvInline(json) => Self::parse_json(json),
        };
        let config = loaded.with_context(|| format!("no usable config in {source}"))?;
        Self::validate(&config).with_context(|| format!("rejected config from {source}"))?;
        Ok(config)
    }

    /// Read a config file. A `.toml` or `.json` extension picks the format;
    /// other files are tried as TOML, then as JSON.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let display = path.display();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read comparator config {display}"))?;
        let parsed = match ConfigFormat::from_path(path) {
            Some(format) => format.parse(&contents),
            None => Self::parse_from_str(&contents),
        };
        parsed.with_context(|| format!("invalid comparator config {display}"))
    }

    /// Parse a document of unknown format: TOML first, then JSON.
    pub fn parse_from_str(contents: &str) -> anyhow::Result<Self> {
        let toml_err = match ConfigFormat::Toml.parse(contents) {
            Ok(config) => return Ok(config),
            Err(err) => err,
        };
        ConfigFormat::Json
            .parse(contents)
            .map_err(|json_err| anyhow!("neither TOML ({toml_err}) nor JSON ({json_err})"))
    }

    /// Parse a JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        ConfigFormat::Json.parse(raw)
    }

    /// Check that every preset describes at least one sort field.
    pub fn validate(&self) -> collate_core::Result<()> {
        let parser = self.parser();
        for (name, text) in &self.presets {
            if parser.parse_fields(text).is_empty() {
                let message = format!("sort preset '{name}' has no fields");
                return Err(ComparatorError::Configuration(message));
            }
        }
        Ok(())
    }

    /// Parser that fills omitted parts from [`defaults`](Self::defaults).
    pub fn parser(&self) -> WktParser {
        WktParser::with_defaults(self.defaults)
    }

    /// Sort fields of the named preset.
    pub fn preset(&self, name: &str) -> collate_core::Result<SortFields> {
        let Some(text) = self.presets.get(name) else {
            let message = format!("unknown sort preset '{name}'");
            return Err(ComparatorError::Configuration(message));
        };
        let fields = self.parser().parse_fields(text);
        debug!(preset = name, fields = fields.len(), "resolved preset");
        Ok(fields)
    }

    /// A builder that parses well-known text with the configured defaults.
    pub fn builder(&self) -> ComparatorBuilder {
        ComparatorBuilder::new().with_parser(self.parser())
    }

    /// Comparator chain for the named preset.
    pub fn chain(&self, name: &str) -> collate_core::Result<ComparatorChain> {
        let fields = self.preset(name)?;
        Ok(self.builder().sort_fields(&fields).build())
    }
}
