use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::{DEFAULT_COMPLEXITY, DEFAULT_TECHNOLOGY, DEFAULT_TOP_N};
use crate::models::TechnologyProfile;
use crate::services::{default_technologies, technology_profile};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub insights: InsightsSettings,
    /// Replaces the built-in technology table when present
    #[serde(default)]
    pub technologies: Option<Vec<TechnologyConfig>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5001 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_suppliers_path")]
    pub suppliers_path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            suppliers_path: default_suppliers_path(),
        }
    }
}

fn default_suppliers_path() -> String { "data/suppliers.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_location")]
    pub default_location: String,
    #[serde(default = "default_technology")]
    pub default_technology: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Complexity assumed when a request carries neither analysis nor a score
    #[serde(default = "default_complexity")]
    pub default_complexity: u8,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            default_technology: default_technology(),
            top_n: default_top_n(),
            default_complexity: default_complexity(),
        }
    }
}

fn default_location() -> String { "Riyadh".to_string() }
fn default_technology() -> String { DEFAULT_TECHNOLOGY.to_string() }
fn default_top_n() -> usize { DEFAULT_TOP_N }
fn default_complexity() -> u8 { DEFAULT_COMPLEXITY }

#[derive(Debug, Clone, Deserialize)]
pub struct InsightsSettings {
    /// Summarizer URL; insights are disabled when unset
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_insights_timeout")]
    pub timeout_secs: u64,
}

impl Default for InsightsSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_insights_timeout(),
        }
    }
}

fn default_insights_timeout() -> u64 { 20 }

/// One technology table entry as written in configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TechnologyConfig {
    pub name: String,
    pub min: u8,
    pub max: u8,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local override file (config/local.toml)
    /// 4. Environment variables (prefixed with RAWASI__)
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false)),
        )
    }

    /// Load configuration from an explicit file instead of the `config/` directory
    ///
    /// The file must exist. Environment variables still override it.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from(path.as_ref())))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder
            // e.g., RAWASI__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RAWASI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_fallbacks(settings)?.try_deserialize()
    }

    /// The technology table to serve: configured entries if any, else the built-in table
    ///
    /// Invalid configured entries are logged and dropped.
    pub fn technology_catalog(&self) -> Vec<TechnologyProfile> {
        let Some(configured) = &self.technologies else {
            return default_technologies();
        };

        configured
            .iter()
            .filter_map(|entry| {
                technology_profile(&entry.name, entry.min, entry.max, &entry.aliases)
                    .map_err(|e| tracing::warn!("Ignoring technology entry: {}", e))
                    .ok()
            })
            .collect()
    }
}

/// Value of a `--config <path>` or `--config=<path>` command-line argument
pub fn config_path_arg<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
    }
    None
}

/// Apply unprefixed environment variables commonly set in deployment
///
/// SUPPLIERS_PATH -> catalog.suppliers_path
/// INSIGHTS_API_KEY -> insights.api_key
/// Prefixed RAWASI__ variables take precedence over these.
fn apply_env_fallbacks(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if env::var("RAWASI__CATALOG__SUPPLIERS_PATH").is_err() {
        if let Ok(path) = env::var("SUPPLIERS_PATH") {
            builder = builder.set_override("catalog.suppliers_path", path)?;
        }
    }
    if env::var("RAWASI__INSIGHTS__API_KEY").is_err() {
        if let Ok(key) = env::var("INSIGHTS_API_KEY") {
            builder = builder.set_override("insights.api_key", key)?;
        }
    }

    builder.build()
}
