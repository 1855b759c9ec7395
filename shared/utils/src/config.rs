use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub references: ReferenceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size: usize,
    pub timeout_seconds: u64,
}

/// LLM provider settings. Passed explicitly into the client constructor;
/// there is no process-wide credential state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

/// Baseline document locations and chunking policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub v1_path: PathBuf,
    pub v2_path: PathBuf,
    /// Chunk budget in accumulated characters, an approximation of the
    /// provider's token limit.
    pub max_chunk_chars: usize,
    /// Where uploaded candidates are spooled; system temp dir when unset.
    pub spool_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with REVISIO prefix
            .add_source(Environment::with_prefix("REVISIO").separator("__"));

        config.build()?.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                max_request_size: 16 * 1024 * 1024, // 16MB
                timeout_seconds: 300,
            },
            llm: LlmConfig {
                api_url: "https://api.openai.com/v1".to_string(),
                api_key: "your-api-key".to_string(),
                model: "gpt-4".to_string(),
                max_tokens: 2000,
                temperature: 0.1,
                timeout_seconds: 120,
            },
            references: ReferenceConfig {
                v1_path: PathBuf::from("v1.pdf"),
                v2_path: PathBuf::from("v2.pdf"),
                max_chunk_chars: 2000,
                spool_dir: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "plain".to_string(),
                file_path: None,
            },
        }
    }
}
