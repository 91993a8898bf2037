mod common;

use axum::http::StatusCode;
use common::{app, empty_request, form_request, read_json};
use serde_json::json;
use tower::ServiceExt;

const ANA: &str = "nome=Ana&celular=111&email=a%40x.com";

#[tokio::test]
async fn create_professional_then_duplicate_conflicts() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(form_request("POST", "/profissional", ANA))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({
            "id": 1,
            "nome": "Ana",
            "celular": "111",
            "email": "a@x.com",
            "total_cometarios": 0,
            "comentarios": []
        })
    );

    let response = app
        .clone()
        .oneshot(form_request("POST", "/profissional", ANA))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        read_json(response).await["message"],
        "Profissional de mesmo nome já salvo na base :/"
    );

    let response = app
        .oneshot(empty_request("GET", "/profissionais"))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["Profissionais"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_professionals_on_empty_base_is_ok() {
    let response = app()
        .await
        .oneshot(empty_request("GET", "/profissionais"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"Profissionais": []}));
}

#[tokio::test]
async fn knowledge_flow_for_existing_professional() {
    let app = app().await;
    app.clone()
        .oneshot(form_request("POST", "/profissional", ANA))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(form_request("POST", "/conhecimento", "id_profissional=1&nome=Go"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total_cometarios"], 1);
    assert_eq!(body["comentarios"], json!([{"nome": "Go"}]));

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/conhecimentoPorID?id_profissional=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"Conhecimentos": [{"nome": "Go"}]}));

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/profissional?nome=Go"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"Profissionais": [{"nome": "Ana", "celular": "111", "email": "a@x.com", "id": 1}]})
    );

    let response = app
        .oneshot(empty_request("GET", "/conhecimentos"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!({"Conhecimentos": [{"nome": "Go"}]}));
}

#[tokio::test]
async fn knowledge_for_missing_professional_is_not_found_and_not_saved() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(form_request("POST", "/conhecimento", "id_profissional=99&nome=Go"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await["message"],
        "Profissional não encontrado na base :/"
    );

    let response = app
        .oneshot(empty_request("GET", "/conhecimentos"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!({"Conhecimentos": []}));
}

#[tokio::test]
async fn empty_search_is_404_but_empty_listing_by_id_is_200() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/profissional?nome=Cobol"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("GET", "/conhecimentoPorID?id_profissional=7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"Conhecimentos": []}));
}

#[tokio::test]
async fn delete_professional_by_double_encoded_name() {
    let app = app().await;
    app.clone()
        .oneshot(form_request(
            "POST",
            "/profissional",
            "nome=Jo%C3%A3o&celular=1&email=j%40x.com",
        ))
        .await
        .unwrap();

    // "João" codificado duas vezes e mais uma vez pela query string
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/profissional?nome=Jo%2525C3%2525A3o"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"message": "Profissional removido", "nome": "João"})
    );

    let response = app
        .oneshot(empty_request("DELETE", "/profissional?nome=Jo%C3%A3o"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_invalid_utf8_name_is_not_found() {
    let app = app().await;
    app.clone()
        .oneshot(form_request("POST", "/profissional", ANA))
        .await
        .unwrap();

    // %FF depois das duas decodificações não é UTF-8 válido
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/profissional?nome=%2525FF"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        json!({"message": "Profissional não encontrado na base :/"})
    );

    let response = app
        .oneshot(empty_request("GET", "/profissionais"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["Profissionais"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_professional_removes_its_knowledge() {
    let app = app().await;
    app.clone()
        .oneshot(form_request("POST", "/profissional", ANA))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request("POST", "/conhecimento", "id_profissional=1&nome=Go"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/profissional?nome=Ana"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request("GET", "/conhecimentos"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!({"Conhecimentos": []}));
}

#[tokio::test]
async fn delete_knowledge_by_professional_id() {
    let app = app().await;
    app.clone()
        .oneshot(form_request("POST", "/profissional", ANA))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/profissional",
            "nome=Bia&celular=2&email=b%40x.com",
        ))
        .await
        .unwrap();
    for body in [
        "id_profissional=1&nome=Go",
        "id_profissional=1&nome=Rust",
        "id_profissional=2&nome=Go",
    ] {
        app.clone()
            .oneshot(form_request("POST", "/conhecimento", body))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/conhecimento?id_profissional=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"message": "Conhecimento removido", "id_profissional": 1})
    );

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/conhecimentoPorID?id_profissional=2"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!({"Conhecimentos": [{"nome": "Go"}]}));

    let response = app
        .oneshot(empty_request("DELETE", "/conhecimento?id_profissional=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await["message"],
        "Conhecimento não encontrado na base :/"
    );
}

#[tokio::test]
async fn invalid_input_is_rejected_before_the_handler() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(form_request("POST", "/profissional", "nome=Ana"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/conhecimentoPorID?id_profissional=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .oneshot(empty_request("GET", "/profissionais"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!({"Profissionais": []}));
}

#[tokio::test]
async fn root_redirects_to_docs_and_spec_is_served() {
    let app = app().await;

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/openapi");

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/openapi"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request("GET", "/openapi/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let doc = read_json(response).await;
    assert_eq!(doc["info"]["title"], "Minha API");
}
