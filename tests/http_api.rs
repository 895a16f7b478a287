//! Тесты HTTP-контракта поверх маршрутов controllers.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cinema_booking::config::{AppConfig, Config, SeedConfig};
use cinema_booking::{controllers, AppState};

fn app() -> Router {
    let config = Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "off".to_string(),
        },
        seed: SeedConfig {
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        },
    };
    controllers::routes().with_state(AppState::new(config))
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send_empty(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Отказы приходят плоской строкой, успехи - JSON-объектом
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

#[tokio::test]
async fn register_and_login_roundtrip() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/register",
        json!({"username": "alice", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        Value::String("Пользователь alice зарегистрирован".to_string())
    );

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/login",
        json!({"username": "alice", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["is_admin"], Value::Bool(false));

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/login",
        json!({"username": "alice", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_rejects_taken_username() {
    let app = app();
    let payload = json!({"username": "alice", "password": "pw"});

    let (status, _) = send_json(&app, Method::POST, "/register", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, Method::POST, "/register", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_movies_returns_seeded_catalog() {
    let app = app();

    let (status, body) = send_empty(&app, Method::GET, "/movies").await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|movie| movie["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Титаник", "Интерстеллар"]);
}

#[tokio::test]
async fn booking_conflict_resolves_after_cancel() {
    let app = app();

    let book = |user: &str| json!({"session_id": 1, "seat_number": 5, "username": user});

    let (status, _) = send_json(&app, Method::POST, "/book", book("alice")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, Method::POST, "/book", book("bob")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, Value::String("Место уже забронировано".to_string()));

    let (status, _) = send_json(&app, Method::POST, "/cancel", book("alice")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, Method::POST, "/book", book("bob")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn booking_validates_session_and_seat() {
    let app = app();

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/book",
        json!({"session_id": 99, "seat_number": 1, "username": "alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/book",
        json!({"session_id": 1, "seat_number": 11, "username": "alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, Value::String("Неверный номер места".to_string()));
}

#[tokio::test]
async fn edit_session_gated_by_admin() {
    let app = app();

    let (status, _) = send_empty(
        &app,
        Method::PUT,
        "/sessions/1/edit?time=22:00&username=alice",
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send_empty(
        &app,
        Method::PUT,
        "/sessions/1/edit?time=22:00&username=admin",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        Value::String("Сеанс 1 обновлён, новое время 22:00".to_string())
    );

    // Время видно в выдаче сеансов фильма
    let (_, sessions) = send_empty(&app, Method::GET, "/sessions/1").await;
    assert_eq!(sessions[0]["time"], "22:00");

    let (status, _) = send_empty(
        &app,
        Method::PUT,
        "/sessions/99/edit?time=22:00&username=admin",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_session_tolerates_missing_id() {
    let app = app();

    let (status, _) = send_empty(&app, Method::DELETE, "/sessions/2?username=alice").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send_empty(&app, Method::DELETE, "/sessions/2?username=admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], Value::String("Сеанс 2 удалён".to_string()));

    let (_, sessions) = send_empty(&app, Method::GET, "/sessions/1").await;
    let ids: Vec<i64> = sessions
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1]);

    // Несуществующий id - тот же успешный ответ
    let (status, body) = send_empty(&app, Method::DELETE, "/sessions/999?username=admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        Value::String("Сеанс 999 удалён".to_string())
    );
}

#[tokio::test]
async fn admin_booking_removal_contract() {
    let app = app();

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/book",
        json!({"session_id": 1, "seat_number": 5, "username": "alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_empty(
        &app,
        Method::DELETE,
        "/sessions/1/booking?seat_number=5&username=alice&admin_username=alice",
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send_empty(
        &app,
        Method::DELETE,
        "/sessions/1/booking?seat_number=5&username=alice&admin_username=admin",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        Value::String("Бронь места 5 пользователя alice удалена".to_string())
    );

    // Повторное снятие той же брони - отказ
    let (status, _) = send_empty(
        &app,
        Method::DELETE,
        "/sessions/1/booking?seat_number=5&username=alice&admin_username=admin",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_empty(
        &app,
        Method::DELETE,
        "/sessions/99/booking?seat_number=5&username=alice&admin_username=admin",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sessions_listing_serializes_structured_bookings() {
    let app = app();

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/book",
        json!({"session_id": 3, "seat_number": 4, "username": "alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, sessions) = send_empty(&app, Method::GET, "/sessions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sessions[0]["id"], 3);
    assert_eq!(sessions[0]["seats_booked"][0]["seat_number"], 4);
    assert_eq!(sessions[0]["seats_booked"][0]["username"], "alice");
}
