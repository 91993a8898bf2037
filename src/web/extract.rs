//! # Extratores com Validação
//!
//! [`ValidForm`] e [`ValidQuery`] desserializam a struct crua de
//! [`super::schemas`], rodam [`Validate::validate`] e entregam ao handler
//! o tipo já validado. Qualquer falha responde 422 via [`ApiError`] sem
//! que o corpo do handler execute.
//!
//! ```text
//! request ──► Form / Multipart / Query ──► T (cru) ──► validate() ──► T::Output
//!                    │                                     │
//!                    └────────── ApiError::Validation ◄────┘
//! ```
//!
//! Forms são aceitos tanto como `application/x-www-form-urlencoded` quanto
//! como `multipart/form-data` (formato enviado pela UI de documentação e
//! por `FormData` no navegador).

use axum::extract::{FromRequest, FromRequestParts, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Form;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;
use super::schemas::Validate;

/// Corpo de form validado; o handler recebe `T::Output`.
pub struct ValidForm<T: Validate>(pub T::Output);

/// Query string validada; o handler recebe `T::Output`.
pub struct ValidQuery<T: Validate>(pub T::Output);

fn rejected(detail: impl std::fmt::Display) -> ApiError {
    tracing::warn!(error = %detail, "Requisição rejeitada na extração");
    ApiError::Validation(detail.to_string())
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

/// Lê todos os campos texto de um multipart e desserializa em `T`.
async fn from_multipart<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, ApiError> {
    let mut fields = Map::new();
    while let Some(field) = multipart.next_field().await.map_err(rejected)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(rejected)?;
        fields.insert(name, Value::String(value));
    }
    serde_json::from_value(Value::Object(fields)).map_err(rejected)
}

impl<T, S> FromRequest<S> for ValidForm<T>
where
    T: Validate + DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let raw: T = if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state).await.map_err(rejected)?;
            from_multipart(multipart).await?
        } else {
            let Form(raw) = Form::<T>::from_request(req, state).await.map_err(rejected)?;
            raw
        };
        raw.validate().map(ValidForm)
    }
}

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: Validate + DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(rejected)?;
        raw.validate().map(ValidQuery)
    }
}
