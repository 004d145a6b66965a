//! Layered application configuration: compiled defaults, an optional TOML
//! patch file with `${ENV}` interpolation, `LOOKBOOK_*` environment
//! overrides, then programmatic overrides, validated at the end.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub stylist: StylistConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

#[derive(Clone, Debug)]
pub struct StylistConfig {
    /// Outfits returned when the caller does not ask for a count.
    pub default_count: usize,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

/// Highest-precedence overrides, typically sourced from CLI flags.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub log_level: Option<String>,
    pub rng_seed: Option<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://lookbook.db".to_string(),
                max_connections: 5,
                timeout_secs: 30,
            },
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 8080,
                graceful_shutdown_secs: 15,
            },
            stylist: StylistConfig { default_count: 3, rng_seed: None },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("lookbook.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(database) = patch.database {
            if let Some(url) = database.url {
                self.database.url = url;
            }
            if let Some(max_connections) = database.max_connections {
                self.database.max_connections = max_connections;
            }
            if let Some(timeout_secs) = database.timeout_secs {
                self.database.timeout_secs = timeout_secs;
            }
        }

        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
        }

        if let Some(stylist) = patch.stylist {
            if let Some(default_count) = stylist.default_count {
                self.stylist.default_count = default_count;
            }
            if let Some(rng_seed) = stylist.rng_seed {
                self.stylist.rng_seed = Some(rng_seed);
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("LOOKBOOK_DATABASE_URL") {
            self.database.url = value;
        }
        if let Some(value) = read_env("LOOKBOOK_DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections =
                parse_u32("LOOKBOOK_DATABASE_MAX_CONNECTIONS", &value)?;
        }
        if let Some(value) = read_env("LOOKBOOK_DATABASE_TIMEOUT_SECS") {
            self.database.timeout_secs = parse_u64("LOOKBOOK_DATABASE_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = read_env("LOOKBOOK_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("LOOKBOOK_SERVER_PORT") {
            self.server.port = parse_u16("LOOKBOOK_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("LOOKBOOK_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("LOOKBOOK_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }

        if let Some(value) = read_env("LOOKBOOK_STYLIST_DEFAULT_COUNT") {
            self.stylist.default_count =
                parse_u64("LOOKBOOK_STYLIST_DEFAULT_COUNT", &value)? as usize;
        }
        if let Some(value) = read_env("LOOKBOOK_STYLIST_RNG_SEED") {
            self.stylist.rng_seed = Some(parse_u64("LOOKBOOK_STYLIST_RNG_SEED", &value)?);
        }

        let log_level =
            read_env("LOOKBOOK_LOGGING_LEVEL").or_else(|| read_env("LOOKBOOK_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("LOOKBOOK_LOGGING_FORMAT").or_else(|| read_env("LOOKBOOK_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(database_url) = overrides.database_url {
            self.database.url = database_url;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(rng_seed) = overrides.rng_seed {
            self.stylist.rng_seed = Some(rng_seed);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_database(&self.database)?;
        validate_server(&self.server)?;
        validate_stylist(&self.stylist)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("lookbook.toml"), PathBuf::from("config/lookbook.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_database(database: &DatabaseConfig) -> Result<(), ConfigError> {
    let url = database.url.trim();
    let sqlite_url =
        url.starts_with("sqlite://") || url.starts_with("sqlite::") || url == ":memory:";
    if !sqlite_url {
        return Err(ConfigError::Validation(
            "database.url must be a sqlite URL (`sqlite://...`, `sqlite::...`, or `:memory:`)"
                .to_string(),
        ));
    }

    if database.max_connections == 0 {
        return Err(ConfigError::Validation(
            "database.max_connections must be greater than zero".to_string(),
        ));
    }

    if database.timeout_secs == 0 || database.timeout_secs > 300 {
        return Err(ConfigError::Validation(
            "database.timeout_secs must be in range 1..=300".to_string(),
        ));
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation(
            "server.bind_address must not be empty".to_string(),
        ));
    }

    if server.graceful_shutdown_secs > 120 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be at most 120".to_string(),
        ));
    }

    Ok(())
}

fn validate_stylist(stylist: &StylistConfig) -> Result<(), ConfigError> {
    if stylist.default_count == 0 || stylist.default_count > 20 {
        return Err(ConfigError::Validation(
            "stylist.default_count must be in range 1..=20".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse::<u32>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    database: Option<DatabasePatch>,
    server: Option<ServerPatch>,
    stylist: Option<StylistPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DatabasePatch {
    url: Option<String>,
    max_connections: Option<u32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct StylistPatch {
    default_count: Option<usize>,
    rng_seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::sync::{Mutex, OnceLock};

    use tempfile::TempDir;

    use super::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_vars(vars: &[&str]) {
        for var in vars {
            env::remove_var(var);
        }
    }

    #[test]
    fn defaults_pass_validation() {
        let _guard = env_lock().lock().unwrap();
        clear_vars(&["LOOKBOOK_DATABASE_URL", "LOOKBOOK_LOG_LEVEL"]);
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stylist.default_count, 3);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn patch_file_overrides_defaults() {
        let _guard = env_lock().lock().unwrap();
        clear_vars(&["LOOKBOOK_DATABASE_URL", "LOOKBOOK_STYLIST_DEFAULT_COUNT"]);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lookbook.toml");
        fs::write(
            &path,
            "[database]\nurl = \"sqlite://styled.db\"\n\n[stylist]\ndefault_count = 5\nrng_seed = 42\n",
        )
        .unwrap();

        let config = AppConfig::load(LoadOptions {
            config_path: Some(path),
            require_file: true,
            overrides: ConfigOverrides::default(),
        })
        .unwrap();

        assert_eq!(config.database.url, "sqlite://styled.db");
        assert_eq!(config.stylist.default_count, 5);
        assert_eq!(config.stylist.rng_seed, Some(42));
    }

    #[test]
    fn env_interpolation_resolves_inside_the_patch() {
        let _guard = env_lock().lock().unwrap();
        env::set_var("LOOKBOOK_TEST_DB_NAME", "interp");
        clear_vars(&["LOOKBOOK_DATABASE_URL"]);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lookbook.toml");
        fs::write(&path, "[database]\nurl = \"sqlite://${LOOKBOOK_TEST_DB_NAME}.db\"\n").unwrap();

        let config = AppConfig::load(LoadOptions {
            config_path: Some(path),
            require_file: true,
            overrides: ConfigOverrides::default(),
        })
        .unwrap();

        assert_eq!(config.database.url, "sqlite://interp.db");
        env::remove_var("LOOKBOOK_TEST_DB_NAME");
    }

    #[test]
    fn env_overrides_beat_the_patch_and_cli_beats_env() {
        let _guard = env_lock().lock().unwrap();
        env::set_var("LOOKBOOK_DATABASE_URL", "sqlite://from-env.db");

        let config = AppConfig::load(LoadOptions {
            config_path: None,
            require_file: false,
            overrides: ConfigOverrides {
                database_url: Some("sqlite://from-cli.db".to_string()),
                ..ConfigOverrides::default()
            },
        })
        .unwrap();

        assert_eq!(config.database.url, "sqlite://from-cli.db");
        env::remove_var("LOOKBOOK_DATABASE_URL");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let _guard = env_lock().lock().unwrap();
        let result = AppConfig::load(LoadOptions {
            config_path: Some("/definitely/not/here/lookbook.toml".into()),
            require_file: true,
            overrides: ConfigOverrides::default(),
        });
        assert!(matches!(result, Err(ConfigError::MissingConfigFile(_))));
    }

    #[test]
    fn non_sqlite_url_fails_validation() {
        let _guard = env_lock().lock().unwrap();
        clear_vars(&["LOOKBOOK_DATABASE_URL"]);
        let mut config = AppConfig::default();
        config.database.url = "postgres://nope".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
