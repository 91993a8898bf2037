//! # Configuração — Variáveis de Ambiente
//!
//! | Variável | Padrão | Uso |
//! |----------|--------|-----|
//! | `CADASTRO_BIND` | `0.0.0.0:5000` | Endereço de escuta do servidor |
//! | `DATABASE_URL` | `sqlite://database/db.sqlite3` | URL sqlx da base SQLite |
//! | `RUST_LOG` | `info` | Filtro de logs (lido em `main`) |

use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database/db.sqlite3";

/// Configuração do processo, resolvida uma vez na inicialização.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve a configuração a partir de uma função de busca de variáveis,
    /// o que permite testar sem mexer no ambiente do processo.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("CADASTRO_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .context("parse CADASTRO_BIND")?;
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}
