use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::rag::prompt::DEFAULT_SYSTEM_INSTRUCTION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the search service, e.g. `https://search.example.net`
    pub endpoint: String,
    /// Opaque credential sent as the `api-key` header
    pub api_key: String,
    pub index_name: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_top_k() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the completion service, e.g. `https://llm.example.net/v1`
    pub endpoint: String,
    /// Bearer credential for the completion service
    pub api_key: String,
    /// Model deployment identifier passed as the `model` field
    pub deployment: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            println!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::RagChatError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config file found. Please create config.toml or config.example.toml",
            )))
        }
    }

    /// Get search service endpoint
    pub fn search_endpoint(&self) -> &str {
        &self.search.endpoint
    }

    /// Get search index name
    pub fn search_index(&self) -> &str {
        &self.search.index_name
    }

    /// Get retrieval top-K
    pub fn top_k(&self) -> usize {
        self.search.top_k
    }

    /// Get completion service endpoint
    pub fn generation_endpoint(&self) -> &str {
        &self.generation.endpoint
    }

    /// Get model deployment identifier
    pub fn deployment(&self) -> &str {
        &self.generation.deployment
    }

    /// Get generation max tokens
    pub fn max_tokens(&self) -> u32 {
        self.generation.max_tokens
    }

    /// Get generation sampling temperature
    pub fn temperature(&self) -> f32 {
        self.generation.temperature
    }

    /// Get the system instruction used for grounded answers
    pub fn system_prompt(&self) -> &str {
        &self.generation.system_prompt
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                enable_cors: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            search: SearchConfig {
                endpoint: "https://your-search-host".to_string(),
                api_key: "your-search-key".to_string(),
                index_name: "hackathon-index".to_string(),
                top_k: default_top_k(),
                timeout_secs: default_timeout_secs(),
            },
            generation: GenerationConfig {
                endpoint: "https://your-llm-host/v1".to_string(),
                api_key: "your-llm-key".to_string(),
                deployment: "chat".to_string(),
                max_tokens: default_max_tokens(),
                temperature: default_temperature(),
                system_prompt: default_system_prompt(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}
