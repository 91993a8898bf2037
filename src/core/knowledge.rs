//! # Knowledge — Conhecimento de um Profissional
//!
//! Um [`Knowledge`] é uma habilidade ou tecnologia (ex: "Rust", "Automação
//! de testes") associada a **exatamente um** profissional através da coluna
//! `id_profissional`.

use chrono::{DateTime, Utc};

use super::professional::ProfessionalId;

/// Tamanho máximo do nome de um conhecimento (coluna `nome`).
pub const MAX_KNOWLEDGE_NAME_LEN: usize = 4000;

/// Conhecimento persistido, como lido da tabela `conhecimento`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Knowledge {
    pub id: i64,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "data_insercao")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "id_profissional")]
    pub professional_id: ProfessionalId,
}

/// Dados para inserir um novo conhecimento.
#[derive(Debug, Clone)]
pub struct NewKnowledge {
    pub professional_id: ProfessionalId,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewKnowledge {
    pub fn new(professional_id: ProfessionalId, name: impl Into<String>) -> Self {
        Self {
            professional_id,
            name: name.into(),
            created_at: None,
        }
    }

    pub fn created_at_or_now(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_else(Utc::now)
    }
}
