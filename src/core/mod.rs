//! # Módulo Core — Tipos do Domínio
//!
//! Agrupa os dois tipos de registro do cadastro:
//!
//! - [`Professional`] — pessoa com nome único e dados de contato
//! - [`Knowledge`] — habilidade associada a um único profissional
//!
//! ## Relacionamento
//!
//! ```text
//! profissional (1) ──< (N) conhecimento
//!      id  ◄──────────── id_profissional
//! ```
//!
//! Os tipos `New*` carregam os dados de entrada de um insert; os tipos
//! persistidos derivam `sqlx::FromRow` e são lidos diretamente das tabelas.

pub mod knowledge;
pub mod professional;

pub use knowledge::{Knowledge, NewKnowledge, MAX_KNOWLEDGE_NAME_LEN};
pub use professional::{
    NewProfessional, Professional, ProfessionalDetail, ProfessionalId, MAX_PROFESSIONAL_NAME_LEN,
};
