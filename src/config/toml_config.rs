use crate::adapters::{InMemoryUserRepository, JsonFileUserRepository};
use crate::domain::ports::UserRepository;
use crate::utils::error::{ConfigError, ConfigResult};
use crate::utils::validation::{validate_one_of, validate_path, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

pub const BACKEND_MEMORY: &str = "memory";
pub const BACKEND_JSON_FILE: &str = "json_file";
const BACKENDS: &[&str] = &[BACKEND_MEMORY, BACKEND_JSON_FILE];

pub const FORMAT_COMPACT: &str = "compact";
pub const FORMAT_JSON: &str = "json";
const FORMATS: &[&str] = &[FORMAT_COMPACT, FORMAT_JSON];

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: String,
    pub path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BACKEND_MEMORY.to_string(),
            path: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` references with environment values.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConfigError::Parse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> ConfigResult<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        if let Some(missing) = re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| std::env::var(name).is_err())
        {
            return Err(ConfigError::MissingEnvVar { name: missing });
        }

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|format| format == FORMAT_JSON)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, FORMATS)?;
            }
        }
        self.storage.validate()
    }
}

impl StorageConfig {
    pub fn build_repository(&self) -> ConfigResult<Arc<dyn UserRepository>> {
        self.validate()?;

        if self.backend == BACKEND_JSON_FILE {
            let path = validate_required_field("storage.path", &self.path)?;
            tracing::debug!("Using JSON file repository at {}", path);
            return Ok(Arc::new(JsonFileUserRepository::new(path)));
        }

        tracing::debug!("Using in-memory repository");
        Ok(Arc::new(InMemoryUserRepository::new()))
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_one_of("storage.backend", &self.backend, BACKENDS)?;

        if self.backend == BACKEND_JSON_FILE {
            let path = validate_required_field("storage.path", &self.path)?;
            validate_path("storage.path", path)?;
        }

        Ok(())
    }
}
