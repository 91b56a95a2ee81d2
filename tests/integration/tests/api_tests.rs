//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, promote_to_admin, TestServer,
};
use reqwest::{multipart, StatusCode};
use serde_json::{json, Value};

/// Register a user and return (request, token)
async fn register_user(server: &TestServer) -> (RegisterRequest, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth.token)
}

/// Create a published comic and return it
async fn create_comic(server: &TestServer, token: &str, title: &str) -> ComicResponse {
    let response = server
        .post_auth("/comics", token, &comic_payload(title, "9.99"))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.email, request.email);
    assert!(!auth.user.is_admin);
    assert_eq!(auth.token.len(), 48);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_password_mismatch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password_confirmation = "SomethingElse1!".to_string();

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();
    request.password_confirmation = "short".to_string();

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/login", &login_req).await.unwrap();
    let auth: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.is_admin);
    assert_eq!(auth.token.len(), 48);
}

#[tokio::test]
async fn test_login_wrong_password_is_opaque() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/login", &login_req).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    // Unknown email answers with the identical message
    assert_eq!(body.error.message, "The provided credentials are incorrect.");

    let unknown_req = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/login", &unknown_req).await.unwrap();
    let unknown_body: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(unknown_body.error.message, body.error.message);
}

#[tokio::test]
async fn test_login_revokes_previous_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, first_token) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/login", &login_req).await.unwrap();
    let auth: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The registration token no longer works
    let response = server.get_auth("/user", &first_token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The fresh one does
    let response = server.get_auth("/user", &auth.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let response = server.post_auth_empty("/logout", &token).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Logged out successfully.");

    let response = server.get_auth("/user", &token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/user").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/user", "not-a-real-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_check_admin_for_regular_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let response = server.get_auth("/check-admin", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["is_admin"], json!(false));
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_list_categories() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/categories").await.unwrap();
    let categories: Vec<CategoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(categories.len() >= 8);
    assert!(categories.iter().any(|c| c.name == "Action"));
    assert!(categories.iter().all(|c| c.color.starts_with('#')));
}

#[tokio::test]
async fn test_get_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/categories/1").await.unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(category.id, 1);

    let response = server.get("/categories/999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comic CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_comic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_user(&server).await;

    let response = server
        .post_auth("/comics", &token, &comic_payload("Creation Test", "12.50"))
        .await
        .unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(comic.title, "Creation Test");
    assert_eq!(comic.price, "12.50");
    assert_eq!(comic.status, "published");
    assert!(!comic.featured);
    assert_eq!(
        comic.owner.as_ref().map(|o| o.name.as_str()),
        Some(register_req.name.as_str())
    );
}

#[tokio::test]
async fn test_create_comic_rounds_price() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let response = server
        .post_auth("/comics", &token, &comic_payload("Rounding Test", "4.999"))
        .await
        .unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comic.price, "5.00");

    // Numeric prices work too
    let mut payload = comic_payload("Numeric Price Test", "0");
    payload["price"] = json!(12.5);
    let response = server.post_auth("/comics", &token, &payload).await.unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comic.price, "12.50");
}

#[tokio::test]
async fn test_create_comic_invalid_price() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let response = server
        .post_auth("/comics", &token, &comic_payload("Bad Price", "free"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_comic_unknown_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let mut payload = comic_payload("Unknown Category", "9.99");
    payload["category_id"] = json!(999999);

    let response = server.post_auth("/comics", &token, &payload).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_comic_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/comics", &comic_payload("No Auth", "9.99"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let url = format!("{}/comics", server.base_url());
    let response = server
        .client
        .post(&url)
        .header("Authorization", format!("Bearer {}", token))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_comic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;
    let created = create_comic(&server, &token, "Show Test").await;

    let response = server.get(&format!("/comics/{}", created.id)).await.unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comic.id, created.id);
    assert!(comic.owner.is_some());

    let response = server.get("/comics/999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_comic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = register_user(&server).await;
    let created = create_comic(&server, &token, "Before Update").await;

    let mut payload = comic_payload("After Update", "19.99");
    payload["status"] = json!("draft");

    let response = server
        .put_auth(&format!("/comics/{}", created.id), &token, &payload)
        .await
        .unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(comic.title, "After Update");
    assert_eq!(comic.price, "19.99");
    assert_eq!(comic.status, "draft");
    assert_eq!(
        comic.owner.as_ref().map(|o| o.name.as_str()),
        Some(user.name.as_str())
    );
}

#[tokio::test]
async fn test_update_comic_by_non_owner_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_user(&server).await;
    let (_, other_token) = register_user(&server).await;
    let created = create_comic(&server, &owner_token, "Protected").await;

    let response = server
        .put_auth(
            &format!("/comics/{}", created.id),
            &other_token,
            &comic_payload("Hijacked", "0.01"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/comics/{}", created.id), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_comic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;
    let created = create_comic(&server, &token, "Doomed").await;

    let response = server
        .delete_auth(&format!("/comics/{}", created.id), &token)
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Comic deleted successfully.");

    // Gone now
    let response = server
        .delete_auth(&format!("/comics/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_owned_comics_include_drafts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let mut payload = comic_payload("My Draft", "3.00");
    payload["status"] = json!("draft");
    let response = server.post_auth("/comics", &token, &payload).await.unwrap();
    let draft: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/user/comics", &token).await.unwrap();
    let comics: Vec<ComicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comics.iter().any(|c| c.id == draft.id));
}

// ============================================================================
// Browsing and Search Tests
// ============================================================================

#[tokio::test]
async fn test_featured_excludes_drafts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let mut payload = comic_payload("Featured Published", "5.00");
    payload["featured"] = json!(true);
    let response = server.post_auth("/comics", &token, &payload).await.unwrap();
    let published: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut payload = comic_payload("Featured Draft", "5.00");
    payload["featured"] = json!(true);
    payload["status"] = json!("draft");
    let response = server.post_auth("/comics", &token, &payload).await.unwrap();
    let draft: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/comics/featured").await.unwrap();
    let featured: Vec<ComicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(featured.iter().any(|c| c.id == published.id));
    assert!(featured.iter().all(|c| c.id != draft.id));
}

#[tokio::test]
async fn test_search_by_term_with_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let marker = format!("Zxq{}", integration_tests::unique_suffix());
    for i in 0..3 {
        create_comic(&server, &token, &format!("{marker} Volume {i}")).await;
    }

    let response = server
        .get(&format!("/comics/search?q={marker}&page=1&per_page=2"))
        .await
        .unwrap();
    let page: ComicPageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.per_page, 2);
    assert_eq!(page.data.len(), 2);
    assert!(page.data.iter().all(|c| c.title.contains(&marker)));

    let response = server
        .get(&format!("/comics/search?q={marker}&page=2&per_page=2"))
        .await
        .unwrap();
    let page: ComicPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
}

#[tokio::test]
async fn test_search_with_out_of_range_page_is_empty() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/comics/search?page={}", i64::MAX))
        .await
        .unwrap();
    let page: ComicPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_search_filters_by_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let marker = format!("Wvp{}", integration_tests::unique_suffix());
    let mut payload = comic_payload(&format!("{marker} Draft"), "2.00");
    payload["status"] = json!("draft");
    server.post_auth("/comics", &token, &payload).await.unwrap();
    create_comic(&server, &token, &format!("{marker} Published")).await;

    let response = server
        .get(&format!("/comics/search?q={marker}&status=draft"))
        .await
        .unwrap();
    let page: ComicPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].status, "draft");
}

#[tokio::test]
async fn test_comics_by_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;
    let created = create_comic(&server, &token, "Category Browse Test").await;

    let response = server.get("/comics/by-category/1").await.unwrap();
    let comics: Vec<ComicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comics.iter().any(|c| c.id == created.id));
    assert!(comics
        .iter()
        .all(|c| c.category_id == Some(1) && c.status == "published"));

    let response = server.get("/comics/by-category/999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Image Upload Tests
// ============================================================================

#[tokio::test]
async fn test_create_comic_with_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let image_bytes: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let form = multipart::Form::new()
        .text("title", "Illustrated Test")
        .text("description", "A story with a cover.")
        .text("author", "Test Author")
        .text("genre", "Fantasy")
        .text("category_id", "1")
        .text("price", "7.25")
        .part(
            "image",
            multipart::Part::bytes(image_bytes.to_vec())
                .file_name("cover.png")
                .mime_str("image/png")
                .unwrap(),
        );

    let response = server
        .post_multipart_auth("/comics", &token, form)
        .await
        .unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let image_url = comic.image_url.clone().expect("image_url should be set");
    assert!(image_url.starts_with("/images/"));
    assert_eq!(comic.price, "7.25");

    // The stored file is served statically
    let response = server.get(&image_url).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Deleting the comic removes the file
    let response = server
        .delete_auth(&format!("/comics/{}", comic.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&image_url).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_comic_with_bad_image_extension() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let form = multipart::Form::new()
        .text("title", "Bad Upload")
        .text("description", "A story without a valid cover.")
        .text("author", "Test Author")
        .text("genre", "Horror")
        .text("category_id", "1")
        .text("price", "7.25")
        .part(
            "image",
            multipart::Part::bytes(b"#!/bin/sh".to_vec())
                .file_name("cover.sh")
                .mime_str("text/x-shellscript")
                .unwrap(),
        );

    let response = server
        .post_multipart_auth("/comics", &token, form)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_comic_with_oversize_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    // One byte past the 5 MB default cap
    let oversize = vec![0u8; 5 * 1024 * 1024 + 1];
    let form = multipart::Form::new()
        .text("title", "Oversized Upload")
        .text("description", "A story with too large a cover.")
        .text("author", "Test Author")
        .text("genre", "Fantasy")
        .text("category_id", "1")
        .text("price", "7.25")
        .part(
            "image",
            multipart::Part::bytes(oversize)
                .file_name("cover.png")
                .mime_str("image/png")
                .unwrap(),
        );

    let response = server
        .post_multipart_auth("/comics", &token, form)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_comic_replaces_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let image_bytes: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let form = multipart::Form::new()
        .text("title", "Reillustrated")
        .text("description", "A story whose cover changes.")
        .text("author", "Test Author")
        .text("genre", "Fantasy")
        .text("category_id", "1")
        .text("price", "7.25")
        .part(
            "image",
            multipart::Part::bytes(image_bytes.to_vec())
                .file_name("first.png")
                .mime_str("image/png")
                .unwrap(),
        );

    let response = server
        .post_multipart_auth("/comics", &token, form)
        .await
        .unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let old_url = comic.image_url.clone().expect("image_url should be set");

    let form = multipart::Form::new()
        .text("title", "Reillustrated")
        .text("description", "A story whose cover changes.")
        .text("author", "Test Author")
        .text("genre", "Fantasy")
        .text("category_id", "1")
        .text("price", "7.25")
        .part(
            "image",
            multipart::Part::bytes(image_bytes.to_vec())
                .file_name("second.jpg")
                .mime_str("image/jpeg")
                .unwrap(),
        );

    let response = server
        .put_multipart_auth(&format!("/comics/{}", comic.id), &token, form)
        .await
        .unwrap();
    let updated: ComicResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let new_url = updated.image_url.clone().expect("image_url should be set");
    assert_ne!(new_url, old_url);

    // The old file is gone, the replacement is served
    let response = server.get(&old_url).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get(&new_url).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_endpoints_require_admin_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_user(&server).await;

    let response = server.get_auth("/admin/stats", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth("/admin/users", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_user(&server).await;
    create_comic(&server, &token, "Stats Fixture").await;
    promote_to_admin(&register_req.email).await.unwrap();

    let response = server.get_auth("/admin/stats", &token).await.unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(stats["totalComics"].as_i64().unwrap() >= 1);
    assert!(stats["totalUsers"].as_i64().unwrap() >= 1);
    assert!(stats["publishedComics"].as_i64().unwrap() >= 1);
    assert!(stats["publishedComics"].as_i64() <= stats["totalComics"].as_i64());
}

#[tokio::test]
async fn test_admin_stats_consistent_under_concurrent_writes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_user(&server).await;
    promote_to_admin(&register_req.email).await.unwrap();

    let writer = async {
        for i in 0..5 {
            create_comic(&server, &token, &format!("Concurrent Stats {i}")).await;
        }
    };

    let reader = async {
        for _ in 0..10 {
            let response = server.get_auth("/admin/stats", &token).await.unwrap();
            let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();
            assert!(
                stats["publishedComics"].as_i64() <= stats["totalComics"].as_i64(),
                "published count exceeded total: {stats}"
            );
        }
    };

    tokio::join!(writer, reader);
}

#[tokio::test]
async fn test_admin_list_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_user(&server).await;
    create_comic(&server, &token, "Counted Comic").await;
    promote_to_admin(&register_req.email).await.unwrap();

    let response = server.get_auth("/admin/users", &token).await.unwrap();
    let users: Vec<AdminUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let me = users
        .iter()
        .find(|u| u.email == register_req.email)
        .expect("registered user should be listed");
    assert!(me.is_admin);
    assert_eq!(me.comics_count, 1);
}

#[tokio::test]
async fn test_admin_toggle_featured() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_user(&server).await;
    let created = create_comic(&server, &token, "Toggle Test").await;
    assert!(!created.featured);
    promote_to_admin(&register_req.email).await.unwrap();

    let path = format!("/admin/comics/{}/toggle-featured", created.id);

    let response = server.post_auth_empty(&path, &token).await.unwrap();
    let toggled: FeaturedToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggled.featured);

    let response = server.post_auth_empty(&path, &token).await.unwrap();
    let toggled: FeaturedToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggled.featured);
}

#[tokio::test]
async fn test_admin_can_manage_other_users_comics() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_user(&server).await;
    let created = create_comic(&server, &owner_token, "Moderated").await;

    let (admin_req, admin_token) = register_user(&server).await;
    promote_to_admin(&admin_req.email).await.unwrap();

    let response = server
        .put_auth(
            &format!("/admin/comics/{}", created.id),
            &admin_token,
            &comic_payload("Moderated (edited)", "9.99"),
        )
        .await
        .unwrap();
    let comic: ComicResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comic.title, "Moderated (edited)");

    let response = server
        .delete_auth(&format!("/admin/comics/{}", created.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Routing Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_route_fallback() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/no-such-route").await.unwrap();

    let status = response.status();
    let body: Value = response.json().await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Route not found."));
}
