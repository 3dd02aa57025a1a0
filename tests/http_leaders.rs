mod common;

use axum::http::{Method, StatusCode};
use common::{app, japan, send};
use serde_json::json;

#[tokio::test]
async fn create_leader_resolves_country() {
    let app = app();
    let (_, country) = send(&app, Method::POST, "/countries", Some(japan())).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/leaders",
        Some(json!({ "name": "Fumio Kishida", "years_in_service": 3, "country": "japan" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["country_id"], country["country_id"]);
    assert!(body["leader_id"].as_i64().unwrap() > 0);

    let (status, shown) = send(&app, Method::GET, "/leaders/fumio%20kishida", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shown, body);

    let (status, list) = send(&app, Method::GET, "/leaders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([{ "name": "Fumio Kishida" }]));
}

#[tokio::test]
async fn create_leader_for_unknown_country_is_400() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/leaders",
        Some(json!({ "name": "Nobody", "years_in_service": 1, "country_id": "Atlantis" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Unable to locate country" }));
}

#[tokio::test]
async fn duplicate_leader_is_400() {
    let app = app();
    send(&app, Method::POST, "/countries", Some(japan())).await;
    let leader = json!({ "name": "John Doe", "years_in_service": 3, "country": "Japan" });
    send(&app, Method::POST, "/leaders", Some(leader.clone())).await;
    let (status, body) = send(&app, Method::POST, "/leaders", Some(leader)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A leader with this name already exists");
}

#[tokio::test]
async fn patch_then_delete_leader() {
    let app = app();
    send(&app, Method::POST, "/countries", Some(japan())).await;
    send(
        &app,
        Method::POST,
        "/leaders",
        Some(json!({ "name": "John Doe", "years_in_service": 3, "country": "Japan" })),
    )
    .await;

    let (status, body) = send(&app, Method::PATCH, "/leaders/John%20Doe", Some(json!({ "years_in_service": 12 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["years_in_service"], 12);
    assert_eq!(body["name"], "John Doe");

    let (status, _) = send(&app, Method::DELETE, "/leaders/John%20Doe", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, "/leaders", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No leaders available");
}

#[tokio::test]
async fn unknown_leader_show_and_delete_are_404() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/leaders/Nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send(&app, Method::DELETE, "/leaders/Nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unable to locate leader");
}

#[tokio::test]
async fn create_leader_by_numeric_country_id() {
    let app = app();
    let (_, country) = send(&app, Method::POST, "/countries", Some(japan())).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/leaders",
        Some(json!({ "name": "A", "years_in_service": 1, "country_id": country["country_id"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["country_id"], country["country_id"]);

    let (status, body) = send(
        &app,
        Method::POST,
        "/leaders",
        Some(json!({ "name": "B", "years_in_service": 1, "country_id": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Unable to locate country" }));
}

#[tokio::test]
async fn create_leader_with_both_country_keys_uses_id() {
    let app = app();
    let (_, country) = send(&app, Method::POST, "/countries", Some(japan())).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/leaders",
        Some(json!({
            "name": "A",
            "years_in_service": 1,
            "country": "Atlantis",
            "country_id": country["country_id"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["country_id"], country["country_id"]);
}

#[tokio::test]
async fn patch_leader_with_unknown_id_fails_update() {
    let app = app();
    send(&app, Method::POST, "/countries", Some(japan())).await;
    send(
        &app,
        Method::POST,
        "/leaders",
        Some(json!({ "name": "John Doe", "years_in_service": 3, "country": "Japan" })),
    )
    .await;
    let (status, body) = send(&app, Method::PATCH, "/leaders/John%20Doe", Some(json!({ "leader_id": 99 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Failed to update leader" }));
}

#[tokio::test]
async fn trailing_slash_reaches_leader_index() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/leaders/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No leaders available");
}
