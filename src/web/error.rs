//! # Erros da API
//!
//! Toda falha de um handler vira um [`ApiError`], que sabe seu status HTTP
//! e se serializa como `{"message": "..."}`. Mensagens são fixas: detalhes
//! internos da base nunca chegam ao cliente, só ao log.
//!
//! | Variante | Status |
//! |----------|--------|
//! | `Conflict` | 409 |
//! | `NotFound` | 404 |
//! | `Store` | 400 |
//! | `Validation` | 422 |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const MSG_DUPLICATE_PROFESSIONAL: &str = "Profissional de mesmo nome já salvo na base :/";
pub const MSG_SAVE_FAILED: &str = "Não foi possível salvar novo item :/";
pub const MSG_READ_FAILED: &str = "Não foi possível consultar a base :/";
pub const MSG_DELETE_FAILED: &str = "Não foi possível remover o item :/";
pub const MSG_PROFESSIONAL_NOT_FOUND: &str = "Profissional não encontrado na base :/";
pub const MSG_KNOWLEDGE_NOT_FOUND: &str = "Conhecimento não encontrado na base :/";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Nome de profissional já existe.
    #[error("{}", MSG_DUPLICATE_PROFESSIONAL)]
    Conflict,

    #[error("{0}")]
    NotFound(&'static str),

    /// Falha da base fora do previsto.
    #[error("{0}")]
    Store(&'static str),

    /// Entrada rejeitada antes de chegar ao handler.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Corpo JSON de qualquer resposta de erro.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Profissional não encontrado na base :/")]
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
