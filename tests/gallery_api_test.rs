mod common;

use http::StatusCode;
use serde_json::json;

use common::{create_artist, TestApp};

async fn create_artwork(app: &TestApp, name: &str, artist_id: i64) -> i64 {
    let response = app
        .post(
            "/artworks",
            &json!({ "name": name, "price": 1200.0, "artistId": artist_id }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn artist_registration_returns_the_projection() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/artists",
            &json!({ "firstName": "Frida", "lastName": "Kahlo" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["firstName"], "Frida");
    assert_eq!(body["lastName"], "Kahlo");
}

#[tokio::test]
async fn blank_artist_names_are_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/artists", &json!({ "firstName": "  ", "lastName": "Kahlo" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Validation failed");
}

#[tokio::test]
async fn overlong_artist_name_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/artists",
            &json!({ "firstName": "a".repeat(51), "lastName": "Kahlo" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_artists_on_empty_storage_is_not_found() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/artists").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fetching_unknown_artist_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get("/artists/42").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Artist with id: 42 not found");
}

#[tokio::test]
async fn artwork_is_saved_for_an_existing_artist() {
    let app = TestApp::spawn().await;
    let artist_id = create_artist(&app).await;

    let response = app
        .post(
            "/artworks",
            &json!({ "name": "The Two Fridas", "price": 1200.0, "artistId": artist_id }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["name"], "The Two Fridas");
    assert_eq!(body["price"], 1200.0);
    assert_eq!(body["artistId"].as_i64().unwrap(), artist_id);
}

#[tokio::test]
async fn artwork_for_unknown_artist_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/artworks",
            &json!({ "name": "The Two Fridas", "price": 1200.0, "artistId": 99 }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Artist with id: 99 not found");
}

#[tokio::test]
async fn duplicate_artwork_name_is_rejected() {
    let app = TestApp::spawn().await;
    let artist_id = create_artist(&app).await;
    create_artwork(&app, "The Two Fridas", artist_id).await;

    let response = app
        .post(
            "/artworks",
            &json!({ "name": "The Two Fridas", "price": 900.0, "artistId": artist_id }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["error"],
        "Artwork with name: The Two Fridas already exist."
    );
}

#[tokio::test]
async fn non_positive_price_is_rejected() {
    let app = TestApp::spawn().await;
    let artist_id = create_artist(&app).await;

    for price in [0.0, -3.5] {
        let response = app
            .post(
                "/artworks",
                &json!({ "name": "The Two Fridas", "price": price, "artistId": artist_id }),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], "Validation failed");
    }
}

#[tokio::test]
async fn deleting_an_artist_cascades_to_their_artworks() {
    let app = TestApp::spawn().await;
    let artist_id = create_artist(&app).await;
    let artwork_id = create_artwork(&app, "The Two Fridas", artist_id).await;

    assert_eq!(
        app.delete(&format!("/artists/{artist_id}")).await.status,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.get(&format!("/artworks/{artwork_id}")).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.get("/artworks").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_artwork_and_repeat_is_not_found() {
    let app = TestApp::spawn().await;
    let artist_id = create_artist(&app).await;
    let artwork_id = create_artwork(&app, "The Two Fridas", artist_id).await;

    assert_eq!(
        app.delete(&format!("/artworks/{artwork_id}")).await.status,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.delete(&format!("/artworks/{artwork_id}")).await.status,
        StatusCode::NOT_FOUND
    );
}
