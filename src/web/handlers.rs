//! # Handlers HTTP — Os Endpoints do Cadastro
//!
//! Cada função pública é um handler Axum mapeado em
//! [`super::create_router()`]. Todos seguem o mesmo formato: entrada já
//! validada pelo extrator, **uma** operação na base, e o resultado mapeado
//! para uma view JSON ou um [`ApiError`].
//!
//! | Handler | Método | Rota | Vazio é erro? |
//! |---------|--------|------|---------------|
//! | `add_professional` | POST | `/profissional` | — |
//! | `list_professionals` | GET | `/profissionais` | não |
//! | `list_knowledge` | GET | `/conhecimentos` | não |
//! | `search_professionals` | GET | `/profissional` | **sim** (404) |
//! | `delete_professional` | DELETE | `/profissional` | sim (404) |
//! | `add_knowledge` | POST | `/conhecimento` | sim (404) |
//! | `list_knowledge_of` | GET | `/conhecimentoPorID` | não |
//! | `delete_knowledge_of` | DELETE | `/conhecimento` | sim (404) |

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Json;
use utoipa::OpenApi;

use super::error::{
    ApiError, ApiResult, ErrorBody, MSG_DELETE_FAILED, MSG_KNOWLEDGE_NOT_FOUND,
    MSG_PROFESSIONAL_NOT_FOUND, MSG_READ_FAILED, MSG_SAVE_FAILED,
};
use super::extract::{ValidForm, ValidQuery};
use super::openapi::ApiDoc;
use super::schemas::{
    KnowledgeDeleted, KnowledgeForm, KnowledgeList, KnowledgeSearchQuery, ProfessionalDeleteQuery,
    ProfessionalDeleted, ProfessionalForm, ProfessionalIdQuery, ProfessionalList, ProfessionalView,
};
use super::state::AppState;
use super::templates;
use crate::persistence::StoreError;

/// Loga a falha da base e devolve a mensagem fixa para o cliente.
fn store_failure(err: StoreError, message: &'static str) -> ApiError {
    tracing::error!(error = %err, "Falha na base de dados");
    ApiError::Store(message)
}

// ─── Documentação ─────────────────────────────────────────────────

/// GET `/` — Redireciona para `/openapi`, tela de escolha da documentação.
#[utoipa::path(
    get,
    path = "/",
    tag = "Documentação",
    responses((status = 303, description = "Redireciona para /openapi"))
)]
pub async fn home() -> Redirect {
    Redirect::to("/openapi")
}

/// GET `/openapi`
pub async fn docs_index() -> Html<String> {
    Html(templates::docs_index().into_string())
}

/// GET `/openapi/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn swagger() -> Html<String> {
    Html(templates::swagger_page().into_string())
}

pub async fn redoc() -> Html<String> {
    Html(templates::redoc_page().into_string())
}

pub async fn rapidoc() -> Html<String> {
    Html(templates::rapidoc_page().into_string())
}

// ─── Profissional ─────────────────────────────────────────────────

/// POST `/profissional` — Adiciona um novo profissional à base.
///
/// Retorna o profissional criado, ainda sem conhecimentos. Nome repetido
/// responde 409; qualquer outra falha da base, 400.
#[utoipa::path(
    post,
    path = "/profissional",
    tag = "Profissional",
    request_body(content = ProfessionalForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Profissional cadastrado", body = ProfessionalView),
        (status = 409, description = "Nome já cadastrado", body = ErrorBody),
        (status = 400, description = "Falha ao salvar", body = ErrorBody),
        (status = 422, description = "Entrada inválida", body = ErrorBody),
    )
)]
pub async fn add_professional(
    State(state): State<AppState>,
    ValidForm(novo): ValidForm<ProfessionalForm>,
) -> ApiResult<Json<ProfessionalView>> {
    tracing::debug!(nome = %novo.name, "Adicionando profissional");
    match state.db.insert_professional(&novo).await {
        Ok(detail) => {
            tracing::debug!(id = detail.professional.id, nome = %novo.name, "Profissional adicionado");
            Ok(Json(ProfessionalView::from(&detail)))
        }
        Err(StoreError::Conflict) => {
            tracing::warn!(nome = %novo.name, "Erro ao adicionar profissional: nome já salvo na base");
            Err(ApiError::Conflict)
        }
        Err(e) => Err(store_failure(e, MSG_SAVE_FAILED)),
    }
}

/// GET `/profissionais` — Lista todos os profissionais por id crescente.
///
/// Base vazia não é erro: responde 200 com lista vazia.
#[utoipa::path(
    get,
    path = "/profissionais",
    tag = "Profissional",
    responses(
        (status = 200, description = "Listagem de profissionais", body = ProfessionalList),
        (status = 400, description = "Falha ao consultar", body = ErrorBody),
    )
)]
pub async fn list_professionals(State(state): State<AppState>) -> ApiResult<Json<ProfessionalList>> {
    tracing::debug!("Coletando profissionais");
    let rows = state
        .db
        .list_professionals()
        .await
        .map_err(|e| store_failure(e, MSG_READ_FAILED))?;
    tracing::debug!(total = rows.len(), "Profissionais encontrados");
    Ok(Json(ProfessionalList::from_professionals(&rows)))
}

/// GET `/profissional?nome=` — Profissionais que têm o conhecimento `nome`.
///
/// Diferente de `/conhecimentoPorID`, nenhum resultado aqui é 404.
#[utoipa::path(
    get,
    path = "/profissional",
    tag = "Profissional",
    params(KnowledgeSearchQuery),
    responses(
        (status = 200, description = "Profissionais com o conhecimento", body = ProfessionalList),
        (status = 404, description = "Nenhum profissional encontrado", body = ErrorBody),
        (status = 422, description = "Entrada inválida", body = ErrorBody),
    )
)]
pub async fn search_professionals(
    State(state): State<AppState>,
    ValidQuery(conhecimento): ValidQuery<KnowledgeSearchQuery>,
) -> ApiResult<Json<ProfessionalList>> {
    tracing::debug!(conhecimento = %conhecimento, "Buscando profissionais por conhecimento");
    let rows = state
        .db
        .professionals_with_knowledge(&conhecimento)
        .await
        .map_err(|e| store_failure(e, MSG_READ_FAILED))?;

    if rows.is_empty() {
        tracing::warn!(conhecimento = %conhecimento, "Nenhum profissional com o conhecimento");
        return Err(ApiError::NotFound(MSG_PROFESSIONAL_NOT_FOUND));
    }
    tracing::debug!(total = rows.len(), "Profissionais encontrados");
    Ok(Json(ProfessionalList::from_professionals(&rows)))
}

/// DELETE `/profissional?nome=` — Remove um profissional pelo nome.
///
/// O nome passa por duas decodificações extras (ver
/// [`ProfessionalDeleteQuery`]). Os conhecimentos do profissional são
/// removidos junto.
#[utoipa::path(
    delete,
    path = "/profissional",
    tag = "Profissional",
    params(ProfessionalDeleteQuery),
    responses(
        (status = 200, description = "Profissional removido", body = ProfessionalDeleted),
        (status = 404, description = "Profissional não encontrado", body = ErrorBody),
        (status = 422, description = "Entrada inválida", body = ErrorBody),
    )
)]
pub async fn delete_professional(
    State(state): State<AppState>,
    ValidQuery(nome): ValidQuery<ProfessionalDeleteQuery>,
) -> ApiResult<Json<ProfessionalDeleted>> {
    tracing::debug!(nome = %nome, "Deletando profissional");
    let count = state
        .db
        .delete_professional_by_name(&nome)
        .await
        .map_err(|e| store_failure(e, MSG_DELETE_FAILED))?;

    if count == 0 {
        tracing::warn!(nome = %nome, "Erro ao deletar profissional: não encontrado");
        return Err(ApiError::NotFound(MSG_PROFESSIONAL_NOT_FOUND));
    }
    tracing::debug!(nome = %nome, "Profissional deletado");
    Ok(Json(ProfessionalDeleted {
        message: "Profissional removido".to_string(),
        nome,
    }))
}

// ─── Conhecimento ─────────────────────────────────────────────────

/// POST `/conhecimento` — Adiciona um conhecimento a um profissional.
///
/// Se o profissional não existir, nada é gravado e a resposta é 404.
#[utoipa::path(
    post,
    path = "/conhecimento",
    tag = "Conhecimento",
    request_body(content = KnowledgeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Profissional com o novo conhecimento", body = ProfessionalView),
        (status = 404, description = "Profissional não encontrado", body = ErrorBody),
        (status = 400, description = "Falha ao salvar", body = ErrorBody),
        (status = 422, description = "Entrada inválida", body = ErrorBody),
    )
)]
pub async fn add_knowledge(
    State(state): State<AppState>,
    ValidForm(novo): ValidForm<KnowledgeForm>,
) -> ApiResult<Json<ProfessionalView>> {
    tracing::debug!(id_profissional = novo.professional_id, "Adicionando conhecimento");
    let detail = state
        .db
        .add_knowledge(&novo)
        .await
        .map_err(|e| store_failure(e, MSG_SAVE_FAILED))?;

    let Some(detail) = detail else {
        tracing::warn!(
            id_profissional = novo.professional_id,
            "Erro ao adicionar conhecimento: profissional não encontrado"
        );
        return Err(ApiError::NotFound(MSG_PROFESSIONAL_NOT_FOUND));
    };
    tracing::debug!(
        id_profissional = novo.professional_id,
        total = detail.knowledge_count(),
        "Conhecimento adicionado"
    );
    Ok(Json(ProfessionalView::from(&detail)))
}

/// GET `/conhecimentos` — Nomes distintos de conhecimento em toda a base.
#[utoipa::path(
    get,
    path = "/conhecimentos",
    tag = "Conhecimento",
    responses(
        (status = 200, description = "Listagem de conhecimentos", body = KnowledgeList),
        (status = 400, description = "Falha ao consultar", body = ErrorBody),
    )
)]
pub async fn list_knowledge(State(state): State<AppState>) -> ApiResult<Json<KnowledgeList>> {
    tracing::debug!("Coletando conhecimentos");
    let names = state
        .db
        .distinct_knowledge_names()
        .await
        .map_err(|e| store_failure(e, MSG_READ_FAILED))?;
    tracing::debug!(total = names.len(), "Conhecimentos encontrados");
    Ok(Json(KnowledgeList::from_names(names)))
}

/// GET `/conhecimentoPorID?id_profissional=` — Conhecimentos de um profissional.
///
/// Nenhum conhecimento não é erro: responde 200 com lista vazia.
#[utoipa::path(
    get,
    path = "/conhecimentoPorID",
    tag = "Conhecimento",
    params(ProfessionalIdQuery),
    responses(
        (status = 200, description = "Conhecimentos do profissional", body = KnowledgeList),
        (status = 422, description = "Entrada inválida", body = ErrorBody),
    )
)]
pub async fn list_knowledge_of(
    State(state): State<AppState>,
    ValidQuery(id): ValidQuery<ProfessionalIdQuery>,
) -> ApiResult<Json<KnowledgeList>> {
    tracing::debug!(id_profissional = id, "Coletando conhecimentos do profissional");
    let rows = state
        .db
        .knowledge_of(id)
        .await
        .map_err(|e| store_failure(e, MSG_READ_FAILED))?;
    tracing::debug!(total = rows.len(), "Conhecimentos encontrados");
    Ok(Json(KnowledgeList::from_knowledge(&rows)))
}

/// DELETE `/conhecimento?id_profissional=` — Remove TODOS os conhecimentos
/// do profissional.
#[utoipa::path(
    delete,
    path = "/conhecimento",
    tag = "Conhecimento",
    params(ProfessionalIdQuery),
    responses(
        (status = 200, description = "Conhecimentos removidos", body = KnowledgeDeleted),
        (status = 404, description = "Nenhum conhecimento encontrado", body = ErrorBody),
        (status = 422, description = "Entrada inválida", body = ErrorBody),
    )
)]
pub async fn delete_knowledge_of(
    State(state): State<AppState>,
    ValidQuery(id): ValidQuery<ProfessionalIdQuery>,
) -> ApiResult<Json<KnowledgeDeleted>> {
    tracing::debug!(id_profissional = id, "Deletando conhecimentos do profissional");
    let count = state
        .db
        .delete_knowledge_of(id)
        .await
        .map_err(|e| store_failure(e, MSG_DELETE_FAILED))?;

    if count == 0 {
        tracing::warn!(id_profissional = id, "Erro ao deletar conhecimento: não encontrado");
        return Err(ApiError::NotFound(MSG_KNOWLEDGE_NOT_FOUND));
    }
    tracing::debug!(id_profissional = id, removidos = count, "Conhecimentos deletados");
    Ok(Json(KnowledgeDeleted {
        message: "Conhecimento removido".to_string(),
        id_profissional: id,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::persistence::Database;
    use crate::web::{create_router, state::AppState};

    /// Router sobre uma base cujas tabelas foram removidas: toda operação
    /// falha na camada de persistência.
    async fn broken_app() -> Router {
        let db = Database::in_memory().await.unwrap();
        db.execute_raw("DROP TABLE conhecimento; DROP TABLE profissional;")
            .await
            .unwrap();
        create_router(AppState::new(db))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn store_failure_on_create_is_generic_400() {
        let app = broken_app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/profissional")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("nome=Ana&celular=111&email=a%40x.com"))
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Não foi possível salvar novo item :/");
    }

    #[tokio::test]
    async fn store_failure_on_knowledge_create_is_generic_400() {
        let app = broken_app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/conhecimento")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("id_profissional=1&nome=Go"))
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Não foi possível salvar novo item :/");
    }

    #[tokio::test]
    async fn store_failure_on_read_and_delete_is_400() {
        let app = broken_app().await;

        let list = Request::get("/profissionais").body(Body::empty()).unwrap();
        let (status, body) = send(app.clone(), list).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Não foi possível consultar a base :/");

        let delete = Request::delete("/profissional?nome=Ana")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, delete).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Não foi possível remover o item :/");
    }
}
