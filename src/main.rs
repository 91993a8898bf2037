//! # Cadastro de Profissionais — Ponto de Entrada
//!
//! Inicializa logs, configuração e base de dados, e então sobe o servidor.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Lê AppConfig do ambiente
//!   ├── Conecta na base e cria as tabelas
//!   ├── Monta AppState e Router
//!   └── Serve até Ctrl-C (shutdown gracioso)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! # Documentação em http://localhost:5000/openapi
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cadastro_profissionais::config::AppConfig;
use cadastro_profissionais::persistence::Database;
use cadastro_profissionais::web::{self, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(bind = %config.bind_addr, "Cadastro de Profissionais — Starting...");

    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("abrir base {}", config.database_url))?;

    let app = web::create_router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("bind {}", config.bind_addr))?;
    tracing::info!("Server running at http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Servidor encerrado");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Falha ao escutar Ctrl-C");
    }
}
