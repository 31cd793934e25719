use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{ADMIN_KEY, PROXY_KEY, TestContext};

#[tokio::test]
async fn test_seed_replaces_allow_list() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/admin/allowed-users")
        .insert_header(("Authorization", format!("Bearer {}", ADMIN_KEY)))
        .set_json(json!({
            "users": [
                { "email": " Admin@Example.com ", "name": "Admin User" },
                { "email": "delegate@example.com" },
                { "email": "admin@example.com", "name": "Duplicate" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["inserted_count"], 2);
    assert_eq!(body["emails"], json!(["admin@example.com", "delegate@example.com"]));

    assert!(ctx.db.is_allowed("ADMIN@example.com").await.unwrap());
    // the editor from TestContext was replaced
    assert!(!ctx.db.is_allowed(common::EDITOR).await.unwrap());
}

#[tokio::test]
async fn test_add_allowed_user_conflict() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/admin/allowed-users")
        .insert_header(("Authorization", format!("Bearer {}", ADMIN_KEY)))
        .set_json(json!({ "email": "new@example.com", "name": "New" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/admin/allowed-users")
        .insert_header(("Authorization", format!("Bearer {}", ADMIN_KEY)))
        .set_json(json!({ "email": "NEW@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_routes_reject_proxy_key() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/admin/allowed-users")
        .insert_header(("Authorization", format!("Bearer {}", PROXY_KEY)))
        .set_json(json!({ "users": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sample_delegates_replace_existing_data() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.create_app()).await;
    ctx.db
        .insert_delegation(vec![delegate_attendance::types::delegate::NewDelegate {
            name: "Leftover".into(),
            category: None,
            is_head: true,
        }])
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/admin/sample-delegates")
        .insert_header(("Authorization", format!("Bearer {}", ADMIN_KEY)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["inserted_count"], 23);
    // team 1 was already handed out, so the samples start at 2
    assert_eq!(body["team_ids"], json!([2, 3, 4, 5, 6, 7, 8, 9]));

    let all = ctx.db.list_delegates().await.unwrap();
    assert_eq!(all.len(), 23);
    assert!(all.iter().all(|d| d.name != "Leftover" && !d.attendance.is_present()));
    let heads: Vec<_> = all.iter().filter(|d| d.is_head).map(|d| d.name.as_str()).collect();
    assert_eq!(heads.len(), 8);
    assert!(heads.contains(&"Alice Johnson"));

    let req = test::TestRequest::post()
        .uri("/admin/sample-delegates")
        .insert_header(("Authorization", format!("Bearer {}", PROXY_KEY)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
