//! End-to-end tests against a running server backed by an empty database
//!
//! Start the server (`cargo run`) and run with: cargo test -- --ignored

use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://127.0.0.1:3000";
const PASSWORD: &str = "library-pass";

/// Client that keeps cookies and lets tests look at redirects themselves
fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

fn location(response: &reqwest::Response) -> String {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Register a fresh account and return its email
async fn register(client: &Client) -> String {
    let email = format!("{}@example.org", unique("reader"));
    let response = client
        .post(format!("{}/registration", BASE_URL))
        .form(&[
            ("first_name", "Test"),
            ("last_name", "Reader"),
            ("email", email.as_str()),
            ("password", PASSWORD),
            ("confirm_password", PASSWORD),
        ])
        .send()
        .await
        .expect("Failed to send registration");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    email
}

/// Registered and signed-in client
async fn signed_in_client() -> Client {
    let client = client();
    let email = register(&client).await;
    let response = client
        .post(format!("{}/login", BASE_URL))
        .form(&[("email", email.as_str()), ("password", PASSWORD)])
        .send()
        .await
        .expect("Failed to send login");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    client
}

async fn page(client: &Client, path: &str) -> String {
    client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let response = client()
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_sets_session_and_redirects_to_books() {
    let client = client();
    let email = register(&client).await;

    let response = client
        .post(format!("{}/login", BASE_URL))
        .form(&[("email", email.as_str()), ("password", PASSWORD)])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/book/list");
    assert!(response.headers().get("set-cookie").is_some());

    let response = client
        .get(format!("{}/book/list", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password() {
    let client = client();
    let email = register(&client).await;

    let response = client
        .post(format!("{}/login", BASE_URL))
        .form(&[("email", email.as_str()), ("password", "wrong-password")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("set-cookie").is_none());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Invalid password given."));

    // still anonymous
    let response = client
        .get(format!("{}/mybookings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
#[ignore]
async fn test_anonymous_booking_is_refused() {
    let response = client()
        .post(format!("{}/bookings/store", BASE_URL))
        .form(&[("book_id", "1"), ("start_time", "2030-01-01T10:00"), ("end_time", "2030-01-02T10:00")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
#[ignore]
async fn test_store_then_list_category() {
    let client = signed_in_client().await;
    let name = unique("Category");

    let response = client
        .post(format!("{}/category/store", BASE_URL))
        .form(&[("name", name.as_str()), ("status", "on")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = page(&client, &format!("/category/search?search={}", name)).await;
    assert!(body.contains(&name));
    assert!(body.contains("Active"));
}

#[tokio::test]
#[ignore]
async fn test_store_then_list_book() {
    let client = signed_in_client().await;
    let name = unique("Book");

    let response = client
        .post(format!("{}/book/store", BASE_URL))
        .form(&[
            ("category_id", "1"),
            ("book_name", name.as_str()),
            ("author_name", "Test Author"),
            ("details", "Some details"),
            ("image", "image/test.png"),
            ("status", "on"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = page(&client, &format!("/book/search?search={}", name)).await;
    assert!(body.contains(&name));
    assert!(body.contains("Test Author"));
    assert!(body.contains("Available"));
}

#[tokio::test]
#[ignore]
async fn test_invalid_category_shows_field_error() {
    let client = signed_in_client().await;

    let response = client
        .post(format!("{}/category/store", BASE_URL))
        .form(&[("name", "ab")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("The name must be at least 3 characters"));
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_records() {
    let client = signed_in_client().await;

    for path in ["/category/2147483647/delete", "/book/2147483647/delete"] {
        let response = client
            .post(format!("{}{}", BASE_URL, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
    }
}

#[tokio::test]
#[ignore]
async fn test_page_beyond_last_is_empty() {
    let client = signed_in_client().await;

    let response = client
        .get(format!("{}/book/list?page=100000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("No books found."));
}

/// Store a book as `client` and return its id, read back from the search page
async fn store_book(client: &Client, name: &str) -> i32 {
    let response = client
        .post(format!("{}/book/store", BASE_URL))
        .form(&[
            ("category_id", "1"),
            ("book_name", name),
            ("author_name", "Test Author"),
            ("details", "Some details"),
            ("image", "image/test.png"),
            ("status", "on"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = page(client, &format!("/book/search?search={}", name)).await;
    let end = body.find("/bookdetails\"").expect("Book link missing");
    let start = body[..end].rfind('/').expect("Malformed book link") + 1;
    body[start..end].parse().expect("Book id is not a number")
}

#[tokio::test]
#[ignore]
async fn test_booking_is_stored_for_session_user() {
    let reader = signed_in_client().await;
    let name = unique("Booked");
    let book_id = store_book(&reader, &name).await;

    let response = reader
        .post(format!("{}/bookings/store", BASE_URL))
        .form(&[
            ("book_id", book_id.to_string().as_str()),
            ("start_time", "2030-01-01T10:00"),
            ("end_time", "2030-01-02T10:00"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/book/list");

    // the book is no longer available
    let details = page(&reader, &format!("/book/{}/bookdetails", book_id)).await;
    assert!(details.contains("Booked"));
    assert!(!details.contains("Book this title"));

    let mine = page(&reader, "/mybookings").await;
    assert!(mine.contains(&name));

    let other = signed_in_client().await;
    let theirs = page(&other, "/mybookings").await;
    assert!(!theirs.contains(&name));
}

#[tokio::test]
#[ignore]
async fn test_search_wildcards_match_literally() {
    let client = signed_in_client().await;
    let name = unique("Literal");
    store_book(&client, &name).await;

    // `_` would match the `-` in the name if it were a wildcard
    let body = page(&client, &format!("/book/search?search={}", name.replace('-', "_"))).await;
    assert!(!body.contains(&name));
}
