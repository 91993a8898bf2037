//! # Módulo Web — A API HTTP do Cadastro
//!
//! Camada HTTP construída com **Axum**, documentada com **utoipa** e com as
//! páginas de documentação renderizadas por **Maud**.
//!
//! ## Rotas
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                                     │
//! │  ├── GET    /                   → redirect /openapi           │
//! │  ├── GET    /openapi            → escolha da documentação     │
//! │  ├── GET    /openapi/openapi.json                             │
//! │  ├── GET    /openapi/{swagger,redoc,rapidoc}                  │
//! │  ├── POST   /profissional       → cadastra profissional       │
//! │  ├── GET    /profissional       → busca por conhecimento      │
//! │  ├── DELETE /profissional       → remove por nome             │
//! │  ├── GET    /profissionais      → lista profissionais         │
//! │  ├── POST   /conhecimento       → adiciona conhecimento       │
//! │  ├── DELETE /conhecimento       → remove por id_profissional  │
//! │  ├── GET    /conhecimentos      → nomes distintos             │
//! │  └── GET    /conhecimentoPorID  → conhecimentos de um id      │
//! ├───────────────────────────────────────────────────────────────┤
//! │ CorsLayer (permissivo) + TraceLayer (span por requisição)     │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`error`] | `ApiError` e mapeamento para status HTTP |
//! | [`schemas`] | Structs de entrada validadas e views de saída |
//! | [`extract`] | Extratores `ValidForm` / `ValidQuery` |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`openapi`] | Documento OpenAPI |
//! | [`templates`] | Páginas HTML de documentação (Maud) |

pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod schemas;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // ── Documentação ─────────────────────────────────────
        .route("/", get(handlers::home))
        .route("/openapi", get(handlers::docs_index))
        .route("/openapi/openapi.json", get(handlers::openapi_json))
        .route("/openapi/swagger", get(handlers::swagger))
        .route("/openapi/redoc", get(handlers::redoc))
        .route("/openapi/rapidoc", get(handlers::rapidoc))
        // ── Profissional ─────────────────────────────────────
        .route(
            "/profissional",
            get(handlers::search_professionals)
                .post(handlers::add_professional)
                .delete(handlers::delete_professional),
        )
        .route("/profissionais", get(handlers::list_professionals))
        // ── Conhecimento ─────────────────────────────────────
        .route(
            "/conhecimento",
            post(handlers::add_knowledge).delete(handlers::delete_knowledge_of),
        )
        .route("/conhecimentos", get(handlers::list_knowledge))
        .route("/conhecimentoPorID", get(handlers::list_knowledge_of))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
