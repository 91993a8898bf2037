//! # Schemas — Formato de Entrada e Saída da API
//!
//! Dois lados de cada endpoint vivem aqui:
//!
//! - **Entrada**: structs "cruas" desserializadas do form ou da query
//!   (todos os campos `Option<String>`) que passam por [`Validate`] e viram
//!   tipos de domínio. Campo ausente, em branco, longo demais ou com id não
//!   numérico vira [`ApiError::Validation`] antes do handler rodar.
//! - **Saída**: views serializadas em JSON, com as chaves que os clientes
//!   já consomem (`comentarios`, `Profissionais`, `Conhecimentos`...).

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiError, ApiResult};
use crate::core::{
    Knowledge, NewKnowledge, NewProfessional, Professional, ProfessionalDetail, ProfessionalId,
    MAX_KNOWLEDGE_NAME_LEN, MAX_PROFESSIONAL_NAME_LEN,
};

/// Passo de validação executado pelos extratores de [`super::extract`].
pub trait Validate {
    type Output;

    fn validate(self) -> ApiResult<Self::Output>;
}

fn required(field: &'static str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("campo obrigatório: {field}"))),
    }
}

fn bounded(field: &'static str, value: String, max: usize) -> ApiResult<String> {
    if value.chars().count() > max {
        return Err(ApiError::Validation(format!(
            "campo {field} excede {max} caracteres"
        )));
    }
    Ok(value)
}

fn professional_id(value: Option<String>) -> ApiResult<ProfessionalId> {
    let raw = required("id_profissional", value)?;
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Validation("id_profissional deve ser um número inteiro".into()))
}

/// Remove uma camada de percent-encoding. Bytes que não formam UTF-8
/// válido viram U+FFFD, então o nome simplesmente não casa com nenhum
/// profissional.
fn decode_once(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

// ─── Entrada ──────────────────────────────────────────────────────

/// Form de cadastro de um novo profissional.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProfessionalForm {
    #[schema(example = "Caique")]
    pub nome: Option<String>,
    #[schema(example = "21989002549")]
    pub celular: Option<String>,
    #[schema(example = "caaiquuee@gmail.com")]
    pub email: Option<String>,
}

impl Validate for ProfessionalForm {
    type Output = NewProfessional;

    fn validate(self) -> ApiResult<NewProfessional> {
        let name = bounded("nome", required("nome", self.nome)?, MAX_PROFESSIONAL_NAME_LEN)?;
        let phone = required("celular", self.celular)?;
        let email = required("email", self.email)?;
        Ok(NewProfessional::new(name, phone, email))
    }
}

/// Form de inclusão de um conhecimento em um profissional existente.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct KnowledgeForm {
    #[schema(value_type = i64, example = 1)]
    pub id_profissional: Option<String>,
    #[schema(example = "Automação de testes")]
    pub nome: Option<String>,
}

impl Validate for KnowledgeForm {
    type Output = NewKnowledge;

    fn validate(self) -> ApiResult<NewKnowledge> {
        let professional_id = professional_id(self.id_profissional)?;
        let name = bounded("nome", required("nome", self.nome)?, MAX_KNOWLEDGE_NAME_LEN)?;
        Ok(NewKnowledge::new(professional_id, name))
    }
}

/// Busca de profissionais pelo nome de um conhecimento.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KnowledgeSearchQuery {
    /// Nome exato do conhecimento.
    #[param(example = "Automação de testes")]
    pub nome: Option<String>,
}

impl Validate for KnowledgeSearchQuery {
    type Output = String;

    fn validate(self) -> ApiResult<String> {
        required("nome", self.nome)
    }
}

/// Remoção de um profissional pelo nome.
///
/// Alguns clientes codificam o parâmetro duas vezes; depois da decodificação
/// normal da query string, o nome ainda é decodificado mais duas vezes.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfessionalDeleteQuery {
    /// Nome exato do profissional.
    #[param(example = "Teste")]
    pub nome: Option<String>,
}

impl Validate for ProfessionalDeleteQuery {
    type Output = String;

    fn validate(self) -> ApiResult<String> {
        let raw = required("nome", self.nome)?;
        Ok(decode_once(&decode_once(&raw)))
    }
}

/// Parâmetro `id_profissional` das rotas de conhecimento.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfessionalIdQuery {
    #[param(value_type = i64, example = 1)]
    pub id_profissional: Option<String>,
}

impl Validate for ProfessionalIdQuery {
    type Output = ProfessionalId;

    fn validate(self) -> ApiResult<ProfessionalId> {
        professional_id(self.id_profissional)
    }
}

// ─── Saída ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KnowledgeView {
    #[schema(example = "Automação de testes")]
    pub nome: String,
}

impl From<&Knowledge> for KnowledgeView {
    fn from(k: &Knowledge) -> Self {
        Self {
            nome: k.name.clone(),
        }
    }
}

/// Profissional + conhecimentos, devolvido pelas rotas de criação.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessionalView {
    pub id: i64,
    pub nome: String,
    pub celular: String,
    pub email: String,
    #[serde(rename = "total_cometarios")]
    pub total_conhecimentos: usize,
    #[serde(rename = "comentarios")]
    pub conhecimentos: Vec<KnowledgeView>,
}

impl From<&ProfessionalDetail> for ProfessionalView {
    fn from(detail: &ProfessionalDetail) -> Self {
        let p = &detail.professional;
        Self {
            id: p.id,
            nome: p.name.clone(),
            celular: p.phone.clone(),
            email: p.email.clone(),
            total_conhecimentos: detail.knowledge_count(),
            conhecimentos: detail.knowledge.iter().map(KnowledgeView::from).collect(),
        }
    }
}

/// Linha da listagem de profissionais (sem conhecimentos).
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessionalSummary {
    pub nome: String,
    pub celular: String,
    pub email: String,
    pub id: i64,
}

impl From<&Professional> for ProfessionalSummary {
    fn from(p: &Professional) -> Self {
        Self {
            nome: p.name.clone(),
            celular: p.phone.clone(),
            email: p.email.clone(),
            id: p.id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessionalList {
    #[serde(rename = "Profissionais")]
    pub profissionais: Vec<ProfessionalSummary>,
}

impl ProfessionalList {
    pub fn from_professionals(professionals: &[Professional]) -> Self {
        Self {
            profissionais: professionals.iter().map(ProfessionalSummary::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KnowledgeList {
    #[serde(rename = "Conhecimentos")]
    pub conhecimentos: Vec<KnowledgeView>,
}

impl KnowledgeList {
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            conhecimentos: names.into_iter().map(|nome| KnowledgeView { nome }).collect(),
        }
    }

    pub fn from_knowledge(knowledge: &[Knowledge]) -> Self {
        Self {
            conhecimentos: knowledge.iter().map(KnowledgeView::from).collect(),
        }
    }
}

/// Confirmação de remoção de profissional.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessionalDeleted {
    #[schema(example = "Profissional removido")]
    pub message: String,
    pub nome: String,
}

/// Confirmação de remoção dos conhecimentos de um profissional.
#[derive(Debug, Serialize, ToSchema)]
pub struct KnowledgeDeleted {
    #[schema(example = "Conhecimento removido")]
    pub message: String,
    pub id_profissional: i64,
}
