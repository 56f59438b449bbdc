//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone `AppConfig`.
//! Todas las variables son opcionales; un valor presente pero inválido es un
//! error de configuración, nunca se sustituye en silencio por el default.
use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;
use crate::providers::resolver::implementations::index_resolver::DEFAULT_FUZZY_THRESHOLD;
use crate::workflow::{DescriptorErrorPolicy, PipelineOptions};

pub const DEFAULT_CATALOG_PATH: &str = "resources/ebi_drugs.csv";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Tabla de referencia (id, nombre, SMILES, dianas).
    pub catalog_path: PathBuf,
    /// Pares (sinónimo, id) adicionales para el índice del resolvedor.
    pub synonyms_path: Option<PathBuf>,
    pub delimiter: u8,
    pub fuzzy_threshold: f64,
    pub pipeline: PipelineOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
               synonyms_path: None,
               delimiter: b';',
               fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
               pipeline: PipelineOptions::default() }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = AppConfig::default();
        if let Some(v) = lookup("DRUGRANK_CATALOG") {
            cfg.catalog_path = PathBuf::from(v);
        }
        cfg.synonyms_path = lookup("DRUGRANK_SYNONYMS").filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        if let Some(v) = lookup("DRUGRANK_DELIMITER") {
            cfg.delimiter = parse_delimiter(&v)?;
        }
        if let Some(v) = lookup("DRUGRANK_FUZZY_THRESHOLD") {
            let t = v.trim()
                     .parse::<f64>()
                     .map_err(|e| ConfigError(format!("DRUGRANK_FUZZY_THRESHOLD '{v}': {e}")))?;
            cfg.fuzzy_threshold = validate_threshold(t)?;
        }
        if let Some(v) = lookup("DRUGRANK_ON_DESCRIPTOR_ERROR") {
            cfg.pipeline.on_descriptor_error =
                v.parse::<DescriptorErrorPolicy>().map_err(|e| ConfigError(format!("DRUGRANK_ON_DESCRIPTOR_ERROR: {e}")))?;
        }
        if let Some(v) = lookup("DRUGRANK_PARALLEL") {
            cfg.pipeline.parallel = parse_bool(&v).ok_or_else(|| ConfigError(format!("DRUGRANK_PARALLEL '{v}' no es booleano")))?;
        }
        Ok(cfg)
    }
}

pub fn validate_threshold(t: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(ConfigError(format!("umbral de similitud fuera de [0, 1]: {t}")))
    }
}

/// Un único carácter ASCII; `\t` y `tab` se aceptan para tabulador.
pub fn parse_delimiter(v: &str) -> Result<u8, ConfigError> {
    match v {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        other => Err(ConfigError(format!("delimitador inválido '{other}'"))),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
