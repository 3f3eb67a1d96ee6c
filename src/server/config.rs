use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";

const DEFAULT_PORT: u16 = 3000;

/// Signing keys for session cookies must be at least 64 bytes.
const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub bot_token: String,
    pub session_secret: String,
    pub port: u16,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = require_var("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::SessionSecretTooShort(MIN_SESSION_SECRET_LEN).into());
        }

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            discord_client_id: require_var("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_var("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_var("DISCORD_REDIRECT_URL")?,
            bot_token: require_var("BOT_TOKEN")?,
            session_secret,
            port,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_base_url: std::env::var("DISCORD_API_BASE_URL")
                .unwrap_or_else(|_| DISCORD_API_BASE_URL.to_string()),
        })
    }
}

fn require_var(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}
