use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, test};
use async_trait::async_trait;
use serde_json::{Value, json};

use employee_registry::model::{Employee, EmployeeChanges};
use employee_registry::routes;
use employee_registry::store::{EmployeeStore, InMemoryStore, StoreError, StoreResult};

fn record(employee_id: &str, email: &str) -> Value {
    json!({
        "name": "A",
        "employee_id": employee_id,
        "email": email,
        "phone": "1234567890",
        "department": "HR",
        "date_of_joining": "2023-05-01",
        "role": "Dev"
    })
}

fn changes(email: &str) -> Value {
    json!({
        "name": "A. Person",
        "email": email,
        "phone": "0987654321",
        "department": "Finance",
        "date_of_joining": "2024-01-15",
        "role": "Lead"
    })
}

macro_rules! app {
    ($store:expr) => {{
        let store: Arc<dyn EmployeeStore> = $store;
        test::init_service(
            App::new()
                .app_data(Data::from(store))
                .configure(routes::configure),
        )
        .await
    }};
}

macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn created_record_is_listed_exactly_once() {
    let app = app!(Arc::new(InMemoryStore::new()));

    let (status, body) = call!(app, test::TestRequest::post()
        .uri("/addEmployee")
        .set_json(record("EMP123", "a@b.com")));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Employee successfully created" }));

    let (status, body) = call!(app, test::TestRequest::get().uri("/getEmployees"));
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(
        rows.iter().filter(|r| r["employee_id"] == "EMP123").count(),
        1
    );
}

#[actix_web::test]
async fn joining_date_round_trips_as_calendar_string() {
    let app = app!(Arc::new(InMemoryStore::new()));
    let mut body = record("EMP1", "one@b.com");
    body["date_of_joining"] = json!("2024-01-15");

    call!(app, test::TestRequest::post().uri("/addEmployee").set_json(body));
    let (_, rows) = call!(app, test::TestRequest::get().uri("/getEmployees"));

    assert_eq!(rows[0]["date_of_joining"], "2024-01-15");
}

#[actix_web::test]
async fn duplicate_id_or_email_is_rejected_and_first_kept() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(store.clone());

    call!(app, test::TestRequest::post()
        .uri("/addEmployee")
        .set_json(record("EMP1", "first@b.com")));

    for dup in [record("EMP1", "other@b.com"), record("EMP2", "first@b.com")] {
        let (status, body) = call!(app, test::TestRequest::post()
            .uri("/addEmployee")
            .set_json(dup));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Email or employee_id already exists");
    }

    let rows = store.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "first@b.com");
}

#[actix_web::test]
async fn invalid_create_body_reports_field_errors() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(store.clone());
    let mut body = record("EMP-1", "a@b.com");
    body["phone"] = json!("12345");

    let (status, body) = call!(app, test::TestRequest::post().uri("/addEmployee").set_json(body));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["employee_id"], "ID must be alphanumeric");
    assert_eq!(body["errors"]["phone"], "Phone number must be 10 digits");
    assert!(store.list().await.unwrap().is_empty());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request_with_message() {
    let app = app!(Arc::new(InMemoryStore::new()));

    let (status, body) = call!(app, test::TestRequest::post()
        .uri("/addEmployee")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json"));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn update_overwrites_all_fields_but_the_id() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(store.clone());
    call!(app, test::TestRequest::post()
        .uri("/addEmployee")
        .set_json(record("EMP1", "one@b.com")));

    let (status, body) = call!(app, test::TestRequest::put()
        .uri("/updateEmployee/EMP1")
        .set_json(changes("new@b.com")));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee successfully updated");
    let row = &store.list().await.unwrap()[0];
    assert_eq!(row.employee_id, "EMP1");
    assert_eq!(row.email, "new@b.com");
    assert_eq!(row.role, "Lead");
    assert_eq!(row.date_of_joining.to_string(), "2024-01-15");
}

#[actix_web::test]
async fn updating_missing_record_is_not_found_and_changes_nothing() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(store.clone());
    call!(app, test::TestRequest::post()
        .uri("/addEmployee")
        .set_json(record("EMP1", "one@b.com")));
    let before = store.list().await.unwrap();

    let (status, body) = call!(app, test::TestRequest::put()
        .uri("/updateEmployee/NOPE")
        .set_json(changes("x@b.com")));

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");
    assert_eq!(store.list().await.unwrap(), before);
}

#[actix_web::test]
async fn invalid_update_body_reports_field_errors_and_changes_nothing() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(store.clone());
    for (id, email) in [("E1", "one@b.com"), ("E2", "two@b.com")] {
        call!(app, test::TestRequest::post()
            .uri("/addEmployee")
            .set_json(record(id, email)));
    }
    let before = store.list().await.unwrap();
    let mut body = changes("two@b.com");
    body["phone"] = json!("12");

    let (status, body) = call!(app, test::TestRequest::put()
        .uri("/updateEmployee/E2")
        .set_json(body));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "message": "Validation failed",
            "errors": { "phone": "Phone number must be 10 digits" }
        })
    );
    assert_eq!(store.list().await.unwrap(), before);
}

#[actix_web::test]
async fn update_to_another_records_email_is_rejected() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(store.clone());
    for (id, email) in [("E1", "one@b.com"), ("E2", "two@b.com")] {
        call!(app, test::TestRequest::post()
            .uri("/addEmployee")
            .set_json(record(id, email)));
    }

    let (status, body) = call!(app, test::TestRequest::put()
        .uri("/updateEmployee/E2")
        .set_json(changes("one@b.com")));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Email or employee_id already exists" }));
    let emails: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.email)
        .collect();
    assert_eq!(emails, vec!["one@b.com".to_string(), "two@b.com".to_string()]);
}

#[actix_web::test]
async fn delete_removes_exactly_the_target() {
    let store = Arc::new(InMemoryStore::new());
    let app = app!(store.clone());
    for (id, email) in [("EMP1", "one@b.com"), ("EMP2", "two@b.com")] {
        call!(app, test::TestRequest::post()
            .uri("/addEmployee")
            .set_json(record(id, email)));
    }

    let (status, body) = call!(app, test::TestRequest::delete().uri("/deleteEmployee/EMP1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee successfully deleted");

    let (status, body) = call!(app, test::TestRequest::delete().uri("/deleteEmployee/EMP1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");

    let ids: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.employee_id)
        .collect();
    assert_eq!(ids, vec!["EMP2".to_string()]);
}

/// Store whose every call fails like a dropped database connection.
struct BrokenStore;

#[async_trait]
impl EmployeeStore for BrokenStore {
    async fn insert(&self, _: &Employee) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _: &str, _: &EmployeeChanges) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _: &str) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[actix_web::test]
async fn storage_failures_answer_generic_500s() {
    let app = app!(Arc::new(BrokenStore));

    let cases = [
        (
            test::TestRequest::post()
                .uri("/addEmployee")
                .set_json(record("EMP1", "one@b.com")),
            "Failed to insert data",
        ),
        (test::TestRequest::get().uri("/getEmployees"), "Failed to retrieve data"),
        (
            test::TestRequest::put()
                .uri("/updateEmployee/EMP1")
                .set_json(changes("one@b.com")),
            "Failed to update employee",
        ),
        (
            test::TestRequest::delete().uri("/deleteEmployee/EMP1"),
            "Failed to delete employee",
        ),
    ];

    for (req, message) in cases {
        let (status, body) = call!(app, req);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": message }));
    }
}
