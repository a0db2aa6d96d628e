use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use taskpad::server::{build_router, AppState};
use taskpad::store::TodoStore;

fn seeded_server() -> TestServer {
    TestServer::new(build_router(AppState::new(TodoStore::seeded()))).unwrap()
}

#[tokio::test]
async fn list_returns_seed_records_in_order() {
    let server = seeded_server();
    let response = server.get("/api/todos").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let todos: Value = response.json();
    let titles: Vec<&str> = todos
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Complete project documentation",
            "Review code and fix bugs",
            "Update README file"
        ]
    );
    assert_eq!(todos[0]["id"], 1);
    assert_eq!(todos[0]["priority"], "High");
}

#[tokio::test]
async fn create_returns_201_with_next_id_and_default_priority() {
    let server = seeded_server();
    let response = server
        .post("/api/todos")
        .json(&json!({ "title": "Write tests" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let todo: Value = response.json();
    assert_eq!(todo["id"], 4);
    assert_eq!(todo["title"], "Write tests");
    assert_eq!(todo["priority"], "Medium");

    let todos: Value = server.get("/api/todos").await.json();
    assert_eq!(todos.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn create_empty_title_is_400() {
    let server = seeded_server();
    let response = server
        .post("/api/todos")
        .json(&json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Title cannot be empty");
}

#[tokio::test]
async fn create_duplicate_title_is_400_case_insensitively() {
    let server = seeded_server();
    let response = server
        .post("/api/todos")
        .json(&json!({ "title": "update readme FILE", "priority": "Low" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "This task already exists");
}

#[tokio::test]
async fn create_unknown_priority_is_400() {
    let server = seeded_server();
    let response = server
        .post("/api/todos")
        .json(&json!({ "title": "New task", "priority": "Urgent" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Unknown priority: Urgent");
}

#[tokio::test]
async fn update_changes_title_and_priority() {
    let server = seeded_server();
    let response = server
        .put("/api/todos/2")
        .json(&json!({ "title": "Review the code", "priority": "High" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let todo: Value = response.json();
    assert_eq!(todo["id"], 2);
    assert_eq!(todo["title"], "Review the code");
    assert_eq!(todo["priority"], "High");
}

#[tokio::test]
async fn update_with_omitted_title_keeps_the_text() {
    let server = seeded_server();
    let response = server
        .put("/api/todos/3")
        .json(&json!({ "priority": "High" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let todo: Value = response.json();
    assert_eq!(todo["title"], "Update README file");
    assert_eq!(todo["priority"], "High");
}

#[tokio::test]
async fn update_keeping_own_title_is_not_a_duplicate() {
    let server = seeded_server();
    let response = server
        .put("/api/todos/1")
        .json(&json!({ "title": "Complete project documentation", "priority": "Low" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let todo: Value = response.json();
    assert_eq!(todo["priority"], "Low");
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let server = seeded_server();
    let response = server
        .put("/api/todos/99")
        .json(&json!({ "title": "Ghost" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
async fn delete_removes_the_record() {
    let server = seeded_server();
    let response = server.delete("/api/todos/2").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Todo deleted successfully");
    assert_eq!(body["id"], 2);

    let todos: Value = server.get("/api/todos").await.json();
    let ids: Vec<u64> = todos
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let server = seeded_server();
    let response = server.delete("/api/todos/99").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
async fn full_api_lifecycle() {
    let server = seeded_server();

    let created: Value = server
        .post("/api/todos")
        .json(&json!({ "title": "Write tests", "priority": "" }))
        .await
        .json();
    assert_eq!(created["id"], 4);
    assert_eq!(created["priority"], "Medium");

    let updated: Value = server
        .put("/api/todos/4")
        .json(&json!({ "title": "Write unit tests", "priority": "High" }))
        .await
        .json();
    assert_eq!(updated["title"], "Write unit tests");
    assert_eq!(updated["priority"], "High");

    server.delete("/api/todos/2").await;

    let todos: Value = server.get("/api/todos").await.json();
    let ids: Vec<u64> = todos
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
}
