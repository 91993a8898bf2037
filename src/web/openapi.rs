//! Documento OpenAPI agregando todas as rotas e schemas da API.

use utoipa::OpenApi;

use super::error::ErrorBody;
use super::handlers;
use super::schemas::{
    KnowledgeDeleted, KnowledgeForm, KnowledgeList, KnowledgeView, ProfessionalDeleted,
    ProfessionalForm, ProfessionalList, ProfessionalSummary, ProfessionalView,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Minha API", version = "1.0.0"),
    paths(
        handlers::home,
        handlers::add_professional,
        handlers::list_professionals,
        handlers::search_professionals,
        handlers::delete_professional,
        handlers::add_knowledge,
        handlers::list_knowledge,
        handlers::list_knowledge_of,
        handlers::delete_knowledge_of,
    ),
    components(schemas(
        ErrorBody,
        ProfessionalForm,
        ProfessionalView,
        ProfessionalSummary,
        ProfessionalList,
        ProfessionalDeleted,
        KnowledgeForm,
        KnowledgeView,
        KnowledgeList,
        KnowledgeDeleted,
    )),
    tags(
        (name = "Documentação", description = "Seleção de documentação: Swagger, Redoc ou RapiDoc"),
        (name = "Profissional", description = "Adição, visualização e remoção de profissionais à base"),
        (name = "Conhecimento", description = "Adição de um conhecimento a um profissional cadastrado na base"),
    )
)]
pub struct ApiDoc;
