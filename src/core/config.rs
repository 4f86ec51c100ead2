use serde::Deserialize;
use std::env;

use super::error::DocumentResult;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub fonts: FontConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub enable_compression: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Exige `X-API-Key` en `/api/generate` y `/api/receipt` cuando además
    /// hay una clave configurada.
    #[serde(default)]
    pub require_api_key: bool,
    #[serde(default)]
    pub api_secret_key: Option<String>,
    #[serde(default = "default_rate_limit_per_minute")]
    pub rate_limit_per_minute: u32,
    #[serde(default = "default_rate_limit_burst")]
    pub rate_limit_burst: u32,
}

/// Rutas candidatas de fuentes para el renderizador raster.
///
/// `regular` y `bold` son listas explícitas por rol. `search_paths` es la
/// lista plana heredada, que se divide en roles por el nombre del archivo.
/// Si todo está vacío se usan las rutas por defecto de cada plataforma.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontConfig {
    #[serde(default)]
    pub regular: Vec<String>,
    #[serde(default)]
    pub bold: Vec<String>,
    #[serde(default)]
    pub search_paths: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_rate_limit_per_minute() -> u32 {
    100
}

fn default_rate_limit_burst() -> u32 {
    20
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            enable_compression: true,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        SecurityConfig {
            require_api_key: false,
            api_secret_key: None,
            rate_limit_per_minute: default_rate_limit_per_minute(),
            rate_limit_burst: default_rate_limit_burst(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerConfig::default(),
            security: SecurityConfig::default(),
            fonts: FontConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración: valores por defecto, `config/default.toml`
    /// (opcional) y variables `APP__*`. Las variables heredadas `HOST`,
    /// `PORT` y `API_SECRET_KEY` actúan como valores por defecto.
    pub fn load() -> DocumentResult<Self> {
        let mut builder = config::Config::builder();

        if let Ok(host) = env::var("HOST") {
            builder = builder.set_default("server.host", host)?;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            builder = builder.set_default("server.port", i64::from(port))?;
        }
        if let Ok(key) = env::var("API_SECRET_KEY") {
            builder = builder.set_default("security.api_secret_key", key)?;
        }

        let settings = builder
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("fonts.regular")
                    .with_list_parse_key("fonts.bold")
                    .with_list_parse_key("fonts.search_paths")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Clave efectiva para la comprobación de `X-API-Key`, si está activa.
    pub fn required_api_key(&self) -> Option<&str> {
        if !self.security.require_api_key {
            return None;
        }
        self.security
            .api_secret_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }
}
