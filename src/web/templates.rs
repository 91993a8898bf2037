//! # Templates Maud — Páginas de Documentação
//!
//! A raiz `/` redireciona para `/openapi`, que permite escolher o estilo de
//! documentação. Cada visualizador é uma página mínima que carrega o bundle
//! JavaScript do próprio projeto e aponta para o documento OpenAPI servido
//! em [`SPEC_URL`].
//!
//! | Função | Rota |
//! |--------|------|
//! | [`docs_index()`] | `/openapi` |
//! | [`swagger_page()`] | `/openapi/swagger` |
//! | [`redoc_page()`] | `/openapi/redoc` |
//! | [`rapidoc_page()`] | `/openapi/rapidoc` |

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Rota do documento OpenAPI em JSON.
pub const SPEC_URL: &str = "/openapi/openapi.json";

const API_TITLE: &str = "Minha API";

/// Esqueleto HTML comum a todas as páginas de documentação.
fn layout(title: &str, head_extra: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                (head_extra)
            }
            body { (body) }
        }
    }
}

/// Página de escolha do visualizador de documentação.
pub fn docs_index() -> Markup {
    layout(
        API_TITLE,
        html! {
            style {
                (PreEscaped(
                    "body{font-family:sans-serif;max-width:40rem;margin:3rem auto;}\
                     li{margin:.5rem 0;}"
                ))
            }
        },
        html! {
            h1 { (API_TITLE) " — Documentação" }
            p { "Seleção de documentação: Swagger, Redoc ou RapiDoc." }
            ul {
                li { a href="/openapi/swagger" { "Swagger" } }
                li { a href="/openapi/redoc" { "Redoc" } }
                li { a href="/openapi/rapidoc" { "RapiDoc" } }
                li { a href=(SPEC_URL) { "openapi.json" } }
            }
        },
    )
}

pub fn swagger_page() -> Markup {
    layout(
        &format!("{API_TITLE} — Swagger"),
        html! {
            link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css";
        },
        html! {
            div id="swagger-ui" {}
            script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" {}
            script {
                (PreEscaped(format!(
                    "window.onload=function(){{SwaggerUIBundle({{url:'{SPEC_URL}',dom_id:'#swagger-ui'}});}};"
                )))
            }
        },
    )
}

pub fn redoc_page() -> Markup {
    layout(
        &format!("{API_TITLE} — Redoc"),
        html! {},
        html! {
            redoc spec-url=(SPEC_URL) {}
            script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js" {}
        },
    )
}

pub fn rapidoc_page() -> Markup {
    layout(
        &format!("{API_TITLE} — RapiDoc"),
        html! {
            script type="module" src="https://unpkg.com/rapidoc/dist/rapidoc-min.js" {}
        },
        html! {
            rapi-doc spec-url=(SPEC_URL) render-style="read" {}
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_links_every_viewer() {
        let page = docs_index().into_string();
        for href in ["/openapi/swagger", "/openapi/redoc", "/openapi/rapidoc", SPEC_URL] {
            assert!(page.contains(href), "faltando link para {href}");
        }
    }

    #[test]
    fn viewers_point_at_openapi_document() {
        assert!(swagger_page().into_string().contains(SPEC_URL));
        assert!(redoc_page().into_string().contains("spec-url=\"/openapi/openapi.json\""));
        assert!(rapidoc_page().into_string().contains("<rapi-doc"));
    }
}
