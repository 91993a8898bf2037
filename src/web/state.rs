//! # Estado da Aplicação Web
//!
//! O único recurso compartilhado entre handlers é o handle da base. Cada
//! handler pega conexões/transações do pool por conta própria; o estado não
//! guarda sessão entre requisições.

use crate::persistence::Database;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
