//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Default persona preamble sent ahead of every prompt.
///
/// Kept as data so deployments can swap the assistant's character without
/// touching prompt-assembly logic.
pub const DEFAULT_PERSONA: &str = "Você é um assistente de IA chamado AstraAI que ajuda os usuários na sua superaçao e recuperaçao contra os vícios.\n Forneça respostas claras, com carisma, concisas e úteis. Sempre tentando ajudar na estimulaçao da dopamina sem os vicios.\n Caso a pessoa tenha vícios, você deverá fornecer respostas que ajudem a superação do vício.\n Sem citar que vai elevar a autoestima da pessoa.";

/// Default closing instruction appended after the rendered history.
pub const DEFAULT_CLOSING_INSTRUCTION: &str =
    "Responda à mensagem mais recente considerando o contexto da conversa.";

/// Root configuration for the gateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Chat configuration
    #[serde(default)]
    pub chat: ChatConfig,
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for the generative-language API
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the generate-content API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            model: default_model(),
        }
    }
}

/// Chat behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Persona preamble prepended to every prompt
    #[serde(default = "default_persona")]
    pub persona: String,
    /// Instruction sentence appended after the rendered history
    #[serde(default = "default_closing_instruction")]
    pub closing_instruction: String,
    /// Maximum messages retained per session
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

fn default_persona() -> String {
    DEFAULT_PERSONA.to_string()
}

fn default_closing_instruction() -> String {
    DEFAULT_CLOSING_INSTRUCTION.to_string()
}

fn default_max_history() -> usize {
    10
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            closing_instruction: default_closing_instruction(),
            max_history: default_max_history(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Directory for log files
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            dir: default_log_dir(),
        }
    }
}
