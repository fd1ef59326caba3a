//! Configuration module
//!
//! Configuration is read once from the environment (and an optional `.env`
//! file) at startup and then passed explicitly into the services that need it.
//! Tests build these structs by hand through [`Config::for_tests`].

use std::env;
use std::path::PathBuf;
use std::time::Duration;

// Common constants
const SERVER_PORT: u16 = 8000;
const DEFAULT_REGION: &str = "us-east-1";
const URL_EXPIRATION_DAYS: u64 = 7;
const S3_MAX_RETRIES: usize = 0;
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_MODEL: &str = "gpt-4o";
const OPENAI_MAX_TOKENS: u32 = 4000;
const OPENAI_TEMPERATURE: f32 = 0.7;
const OPENAI_TIMEOUT_SECS: u64 = 120;
const OUTPUT_DIR: &str = "generated_websites";

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: String,
}

/// Settings for the hosted chat-completions API
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    /// Remove literal `\n` / `\r` escape sequences from model output
    pub strip_escape_sequences: bool,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("strip_escape_sequences", &self.strip_escape_sequences)
            .finish()
    }
}

/// Object storage settings. Every field except the region may be absent; the
/// storage layer reports the gaps instead of refusing to start.
#[derive(Clone, Default)]
pub struct S3Config {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: String,
    pub bucket: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub endpoint: Option<String>,
    pub url_expiration_days: u64,
    pub max_retries: usize,
}

impl S3Config {
    pub fn credentials_present(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }

    pub fn url_expiry(&self) -> Duration {
        Duration::from_secs(self.url_expiration_days * 24 * 60 * 60)
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "<set>"))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<set>"),
            )
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("endpoint", &self.endpoint)
            .field("url_expiration_days", &self.url_expiration_days)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Local output directory settings
#[derive(Clone, Debug)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub save_local_copy: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub s3: S3Config,
    pub output: OutputConfig,
}

/// Read an optional variable, treating an empty value as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env if present (ignored when missing)
        let _ = dotenvy::dotenv();

        let config = Config {
            server: ServerConfig {
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| SERVER_PORT.to_string())
                    .parse()
                    .unwrap_or(SERVER_PORT),
                cors_origins: env::var("CORS_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                environment: env::var("ENVIRONMENT")
                    .or_else(|_| env::var("APP_ENV"))
                    .unwrap_or_else(|_| "development".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "compact".to_string())
                    .to_lowercase(),
            },
            openai: OpenAiConfig {
                api_key: optional_var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| OPENAI_BASE_URL.to_string()),
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| OPENAI_MODEL.to_string()),
                max_tokens: env::var("OPENAI_MAX_TOKENS")
                    .unwrap_or_else(|_| OPENAI_MAX_TOKENS.to_string())
                    .parse()
                    .unwrap_or(OPENAI_MAX_TOKENS),
                temperature: env::var("OPENAI_TEMPERATURE")
                    .unwrap_or_else(|_| OPENAI_TEMPERATURE.to_string())
                    .parse()
                    .unwrap_or(OPENAI_TEMPERATURE),
                timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                    .unwrap_or_else(|_| OPENAI_TIMEOUT_SECS.to_string())
                    .parse()
                    .unwrap_or(OPENAI_TIMEOUT_SECS),
                strip_escape_sequences: env::var("STRIP_ESCAPE_SEQUENCES")
                    .map(|v| parse_bool(&v, true))
                    .unwrap_or(true),
            },
            s3: S3Config {
                access_key_id: optional_var("AWS_ACCESS_KEY_ID"),
                secret_access_key: optional_var("AWS_SECRET_ACCESS_KEY"),
                region: optional_var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
                bucket: optional_var("S3_BUCKET_NAME"),
                endpoint: optional_var("S3_ENDPOINT"),
                url_expiration_days: env::var("S3_URL_EXPIRATION_DAYS")
                    .unwrap_or_else(|_| URL_EXPIRATION_DAYS.to_string())
                    .parse()
                    .unwrap_or(URL_EXPIRATION_DAYS),
                max_retries: env::var("S3_MAX_RETRIES")
                    .unwrap_or_else(|_| S3_MAX_RETRIES.to_string())
                    .parse()
                    .unwrap_or(S3_MAX_RETRIES),
            },
            output: OutputConfig {
                dir: PathBuf::from(
                    env::var("OUTPUT_DIR").unwrap_or_else(|_| OUTPUT_DIR.to_string()),
                ),
                save_local_copy: env::var("SAVE_LOCAL_COPY")
                    .map(|v| parse_bool(&v, true))
                    .unwrap_or(true),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.openai.api_key.is_empty() {
            return Err(anyhow::anyhow!("OPENAI_API_KEY must be set"));
        }

        if self.openai.model.trim().is_empty() {
            return Err(anyhow::anyhow!("OPENAI_MODEL cannot be empty"));
        }

        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(anyhow::anyhow!(
                "OPENAI_TEMPERATURE must be between 0.0 and 2.0"
            ));
        }

        if self.openai.max_tokens == 0 {
            return Err(anyhow::anyhow!("OPENAI_MAX_TOKENS cannot be 0"));
        }

        // Pre-signed S3 URLs cannot outlive 7 days
        if self.s3.url_expiration_days == 0 || self.s3.url_expiration_days > 7 {
            return Err(anyhow::anyhow!(
                "S3_URL_EXPIRATION_DAYS must be between 1 and 7"
            ));
        }

        if self.server.port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT cannot be 0"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.server.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    /// Configuration for tests and local tooling: no credentials, temp-friendly defaults
    pub fn for_tests(output_dir: impl Into<PathBuf>) -> Self {
        Config {
            server: ServerConfig {
                port: SERVER_PORT,
                cors_origins: vec!["*".to_string()],
                environment: "test".to_string(),
                log_format: "compact".to_string(),
            },
            openai: OpenAiConfig {
                api_key: "test-key".to_string(),
                base_url: OPENAI_BASE_URL.to_string(),
                model: OPENAI_MODEL.to_string(),
                max_tokens: OPENAI_MAX_TOKENS,
                temperature: OPENAI_TEMPERATURE,
                timeout_secs: OPENAI_TIMEOUT_SECS,
                strip_escape_sequences: true,
            },
            s3: S3Config {
                region: DEFAULT_REGION.to_string(),
                url_expiration_days: URL_EXPIRATION_DAYS,
                max_retries: S3_MAX_RETRIES,
                ..S3Config::default()
            },
            output: OutputConfig {
                dir: output_dir.into(),
                save_local_copy: true,
            },
        }
    }
}
