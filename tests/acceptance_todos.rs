use axum::body::to_bytes;
use axum::Router;
use serde_json::json;
use todo_file_api::application::todo_service::TodoServiceImpl;
use todo_file_api::http::routes::todos;
use todo_file_api::http::routing;
use todo_file_api::infrastructure::document_store::DocumentStore;
use todo_file_api::infrastructure::file_repo::FileTodoRepository;

fn app_in(dir: &tempfile::TempDir) -> Router {
    let store = DocumentStore::new(dir.path().join("data.json"));
    let service = TodoServiceImpl::new(FileTodoRepository::new(store));
    routing::app(todos::router(todos::AppState { service }))
}

#[tokio::test]
async fn acceptance_create_list_get_update_delete() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_in(&dir);

    // create
    let res = request(&app, "POST", "/todos", Some(json!({ "title": "buy milk" }))).await;
    assert_eq!(res.status(), 201);
    let body = body_json(res).await;
    assert_eq!(body, json!({ "id": 1, "title": "buy milk", "completed": false }));

    // list
    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // get
    let res = request(&app, "GET", "/todos/1", None).await;
    assert_eq!(res.status(), 200);

    // partial update keeps the title
    let res = request(&app, "PATCH", "/todos/1", Some(json!({ "completed": true }))).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body, json!({ "id": 1, "title": "buy milk", "completed": true }));

    // delete
    let res = request(&app, "DELETE", "/todos/1", None).await;
    assert_eq!(res.status(), 204);

    // get 404
    let res = request(&app, "GET", "/todos/1", None).await;
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn acceptance_error_statuses() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_in(&dir);

    // missing title
    let res = request(&app, "POST", "/todos", Some(json!({}))).await;
    assert_eq!(res.status(), 422);
    let body = body_json(res).await;
    assert!(body.get("error").is_some());

    // empty patch
    let res = request(&app, "POST", "/todos", Some(json!({ "title": "x" }))).await;
    assert_eq!(res.status(), 201);
    let res = request(&app, "PATCH", "/todos/1", Some(json!({}))).await;
    assert_eq!(res.status(), 422);

    // malformed id
    let res = request(&app, "GET", "/todos/abc", None).await;
    assert_eq!(res.status(), 400);

    // unknown id
    let res = request(&app, "DELETE", "/todos/99", None).await;
    assert_eq!(res.status(), 404);
    let res = request(&app, "PATCH", "/todos/99", Some(json!({ "completed": true }))).await;
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn acceptance_corrupt_data_file_is_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.json"), "not json").unwrap();
    let app = app_in(&dir);

    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(res.status(), 500);
    // the broken file is surfaced, never replaced
    assert_eq!(std::fs::read_to_string(dir.path().join("data.json")).unwrap(), "not json");
}

async fn request(app: &Router, method: &str, path: &str, body: Option<serde_json::Value>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn body_json(res: hyper::Response<axum::body::Body>) -> serde_json::Value {
    serde_json::from_slice(&to_bytes(res.into_body(), 1024 * 1024).await.unwrap()).unwrap()
}
