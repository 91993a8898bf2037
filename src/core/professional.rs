//! # Professional — O Registro de Pessoa
//!
//! Um [`Professional`] é uma pessoa cadastrada com dados de contato e um
//! **nome único** em toda a base. Cada profissional possui zero ou mais
//! [`Knowledge`](super::Knowledge) associados por chave estrangeira.
//!
//! ## Campos
//!
//! | Campo | Coluna | Descrição |
//! |-------|--------|-----------|
//! | `id` | `id` | Chave substituta gerada pela base no insert |
//! | `name` | `nome` | Nome único (comparação exata, case-sensitive) |
//! | `phone` | `celular` | Telefone celular |
//! | `email` | `email` | E-mail de contato |
//! | `created_at` | `data_insercao` | Momento da inserção |

use chrono::{DateTime, Utc};

use super::knowledge::Knowledge;

/// Tamanho máximo do nome de um profissional (coluna `nome`).
pub const MAX_PROFESSIONAL_NAME_LEN: usize = 140;

/// Alias de tipo para o identificador de um [`Professional`].
pub type ProfessionalId = i64;

/// Profissional persistido, como lido da tabela `profissional`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Professional {
    pub id: ProfessionalId,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "celular")]
    pub phone: String,
    pub email: String,
    #[sqlx(rename = "data_insercao")]
    pub created_at: DateTime<Utc>,
}

/// Dados para inserir um novo profissional.
///
/// Se `created_at` não for informado, a data exata da inserção é usada.
#[derive(Debug, Clone)]
pub struct NewProfessional {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewProfessional {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            created_at: None,
        }
    }

    /// Fixa a data de inserção em vez de usar o relógio no momento do insert.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn created_at_or_now(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_else(Utc::now)
    }
}

/// Visão completa de um profissional: o registro + seus conhecimentos.
///
/// É o que os endpoints de criação (profissional e conhecimento) devolvem.
#[derive(Debug, Clone)]
pub struct ProfessionalDetail {
    pub professional: Professional,
    pub knowledge: Vec<Knowledge>,
}

impl ProfessionalDetail {
    /// Número de conhecimentos associados.
    pub fn knowledge_count(&self) -> usize {
        self.knowledge.len()
    }
}
