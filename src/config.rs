use serde::{Deserialize, Serialize};

/// URL del backend si no se define `API_URL` al compilar
pub const DEFAULT_API_URL: &str = "http://freeelib.runasp.net/api";

/// Clave de localStorage donde vive el token
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Adjuntar `Authorization: Bearer <token>` en cada request
    pub attach_credentials: bool,
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            attach_credentials: true,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("ATTACH_CREDENTIALS"),
            option_env!("TOKEN_STORAGE_KEY"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        attach_credentials: Option<&str>,
        token_storage_key: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .filter(|url| !url.trim().is_empty())
                .map(|url| url.to_string())
                .unwrap_or(defaults.api_url),
            environment: environment
                .map(|env| env.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            attach_credentials: attach_credentials
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.attach_credentials),
            token_storage_key: token_storage_key
                .filter(|key| !key.is_empty())
                .map(|key| key.to_string())
                .unwrap_or(defaults.token_storage_key),
        }
    }

    /// URL base sin `/` final (los endpoints ya empiezan por `/`)
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm-logger según entorno
    pub fn log_level(&self) -> log::Level {
        if self.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
