//! Router tests over an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use catalog_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.unwrap())
}

async fn send(
  store:  &Arc<SqliteStore>,
  method: &str,
  uri:    &str,
  body:   Option<Value>,
) -> Response {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(body) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };
  api_router(store.clone()).oneshot(req).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn create_category(store: &Arc<SqliteStore>, name: &str) -> String {
  let resp = send(store, "POST", "/categories", Some(json!({ "name": name }))).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  json_body(resp).await["id"].as_str().unwrap().to_owned()
}

// ── Categories ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_category() {
  let s = store().await;
  let resp = send(
    &s,
    "POST",
    "/categories",
    Some(json!({ "name": "Filmes", "description": "A categoria mais assistida" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let id = json_body(resp).await["id"].as_str().unwrap().to_owned();

  let resp = send(&s, "GET", &format!("/categories/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = json_body(resp).await;
  assert_eq!(body["name"], "Filmes");
  assert_eq!(body["description"], "A categoria mais assistida");
  assert_eq!(body["is_active"], true);
  assert!(body["deleted_at"].is_null());
}

#[tokio::test]
async fn create_category_with_blank_name_is_422() {
  let s = store().await;
  let resp = send(&s, "POST", "/categories", Some(json!({ "name": "  " }))).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = json_body(resp).await;
  assert_eq!(body["message"], "Could not create Aggregate Category");
  assert_eq!(body["errors"], json!([{ "message": "'name' must not be empty" }]));
}

#[tokio::test]
async fn get_missing_category_is_404() {
  let s = store().await;
  let resp = send(&s, "GET", "/categories/123", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(
    json_body(resp).await["message"],
    "Category with id 123 was not found"
  );
}

#[tokio::test]
async fn update_and_delete_category() {
  let s = store().await;
  let id = create_category(&s, "Film").await;

  let resp = send(
    &s,
    "PUT",
    &format!("/categories/{id}"),
    Some(json!({ "name": "Filmes", "is_active": false })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = json_body(send(&s, "GET", &format!("/categories/{id}"), None).await).await;
  assert_eq!(body["name"], "Filmes");
  assert_eq!(body["is_active"], false);
  assert!(!body["deleted_at"].is_null());

  let resp = send(&s, "DELETE", &format!("/categories/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  let resp = send(&s, "DELETE", &format!("/categories/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn list_categories_pages_and_searches() {
  let s = store().await;
  for name in ["Animes", "Filmes", "Series"] {
    create_category(&s, name).await;
  }

  let resp = send(&s, "GET", "/categories?per_page=2&dir=desc", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = json_body(resp).await;
  assert_eq!(body["total"], 3);
  assert_eq!(body["per_page"], 2);
  assert_eq!(body["items"][0]["name"], "Series");
  assert_eq!(body["items"].as_array().unwrap().len(), 2);

  let body = json_body(send(&s, "GET", "/categories?search=fil", None).await).await;
  assert_eq!(body["total"], 1);
  assert_eq!(body["items"][0]["name"], "Filmes");

  let resp = send(&s, "GET", "/categories?per_page=0", None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Genres ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_genre_with_categories() {
  let s = store().await;
  let category = create_category(&s, "Filmes").await;

  let resp = send(
    &s,
    "POST",
    "/genres",
    Some(json!({ "name": "Acao", "categories_id": [category] })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let id = json_body(resp).await["id"].as_str().unwrap().to_owned();

  let body = json_body(send(&s, "GET", &format!("/genres/{id}"), None).await).await;
  assert_eq!(body["name"], "Acao");
  assert_eq!(body["is_active"], true);
  assert_eq!(body["categories"], json!([category]));
}

#[tokio::test]
async fn create_genre_reports_missing_categories_then_name() {
  let s = store().await;
  let resp = send(
    &s,
    "POST",
    "/genres",
    Some(json!({ "name": "", "categories_id": ["456", "789"] })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  let body = json_body(resp).await;
  assert_eq!(body["message"], "Could not create Aggregate Genre");
  assert_eq!(
    body["errors"],
    json!([
      { "message": "Some categories could not be found: 456, 789" },
      { "message": "'name' must not be empty" },
    ])
  );
}

#[tokio::test]
async fn update_missing_genre_is_404() {
  let s = store().await;
  let resp = send(&s, "PUT", "/genres/123", Some(json!({ "name": "Acao" }))).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(resp).await["message"], "Genre with id 123 was not found");
}

#[tokio::test]
async fn update_list_and_delete_genre() {
  let s = store().await;
  let resp = send(&s, "POST", "/genres", Some(json!({ "name": "Acao" }))).await;
  let id = json_body(resp).await["id"].as_str().unwrap().to_owned();

  let resp = send(
    &s,
    "PUT",
    &format!("/genres/{id}"),
    Some(json!({ "name": "Aventura", "is_active": false })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = json_body(send(&s, "GET", "/genres?search=avent", None).await).await;
  assert_eq!(body["total"], 1);
  assert_eq!(body["items"][0]["id"], id.as_str());
  assert_eq!(body["items"][0]["is_active"], false);

  let resp = send(&s, "DELETE", &format!("/genres/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  let resp = send(&s, "GET", &format!("/genres/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
