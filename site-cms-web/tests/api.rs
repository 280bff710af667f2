use actix_web::{
    http::{header, StatusCode},
    test, App,
};
use serde_json::{json, Value};
use site_cms_models::{
    domain::prelude::Claims,
    settings::{Settings, Sqlite},
};
use site_cms_repository::AdminRepository;
use site_cms_storage::connect_and_migrate;
use site_cms_utils::jwt::encode_jwt;
use site_cms_web::{configure_app, AppState};

const ADMIN: &str = "admin";
const PASSWORD: &str = "s3cret-pass";

async fn state() -> AppState {
    let db = connect_and_migrate(&Sqlite {
        path: ":memory:".into(),
        ..Default::default()
    })
    .await
    .unwrap();
    AdminRepository::bootstrap(&db, ADMIN, PASSWORD, None)
        .await
        .unwrap();
    AppState::new(db, Settings::default())
}

macro_rules! app {
    () => {
        test::init_service(App::new().configure(configure_app(state().await))).await
    };
}

macro_rules! login {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": ADMIN, "password": PASSWORD }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        format!("Bearer {}", body["data"]["token"].as_str().unwrap())
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

fn bearer(claims: &Claims, secret: &str) -> String {
    format!(
        "Bearer {}",
        encode_jwt(claims, secret.as_bytes(), None).unwrap()
    )
}

#[actix_web::test]
async fn health_is_public() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn login_issues_token_for_me() {
    let app = app!();
    let token = login!(app);

    let (status, body) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((header::AUTHORIZATION, token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], ADMIN);
    assert!(body["data"]["last_login"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[actix_web::test]
async fn login_rejects_wrong_password() {
    let app = app!();
    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": ADMIN, "password": "nope" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["reason"], "bad_credentials");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "", "password": "x" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[actix_web::test]
async fn protected_routes_report_why_they_refuse() {
    let app = app!();
    let settings = Settings::default();
    let jwt = &settings.web.jwt;
    let stats = || test::TestRequest::get().uri("/api/dashboard/stats");

    let (status, body) = call!(app, stats());
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["reason"], "missing_token");

    let (_, body) = call!(
        app,
        stats().insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
    );
    assert_eq!(body["reason"], "malformed");

    let claims = Claims::new(jwt.issuer.clone(), 1, ADMIN.into(), 60);
    let (_, body) = call!(
        app,
        stats().insert_header((header::AUTHORIZATION, bearer(&claims, "forged")))
    );
    assert_eq!(body["reason"], "signature_mismatch");

    let expired = Claims::new(jwt.issuer.clone(), 1, ADMIN.into(), -120);
    let (_, body) = call!(
        app,
        stats().insert_header((header::AUTHORIZATION, bearer(&expired, &jwt.secret)))
    );
    assert_eq!(body["reason"], "expired");

    let foreign = Claims::new("elsewhere".into(), 1, ADMIN.into(), 60);
    let (_, body) = call!(
        app,
        stats().insert_header((header::AUTHORIZATION, bearer(&foreign, &jwt.secret)))
    );
    assert_eq!(body["reason"], "invalid_issuer");

    let ghost = Claims::new(jwt.issuer.clone(), 999, "ghost".into(), 60);
    let (_, body) = call!(
        app,
        stats().insert_header((header::AUTHORIZATION, bearer(&ghost, &jwt.secret)))
    );
    assert_eq!(body["reason"], "unknown_admin");

    let valid = Claims::new(jwt.issuer.clone(), 1, ADMIN.into(), 60);
    let (status, body) = call!(
        app,
        stats().insert_header((header::AUTHORIZATION, bearer(&valid, &jwt.secret)))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tours"], 0);
}

#[actix_web::test]
async fn public_reads_need_no_token() {
    let app = app!();
    let (status, body) = call!(app, test::TestRequest::get().uri("/api/cms/all"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sections"].as_array().unwrap().len(), 9);
    assert_eq!(body["data"]["hero"]["id"], 1);

    let (status, _) = call!(app, test::TestRequest::get().uri("/api/tours"));
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/tours/all"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["reason"], "missing_token");
}

#[actix_web::test]
async fn style_is_visible_only_after_publish() {
    let app = app!();
    let token = login!(app);
    let published = || test::TestRequest::get().uri("/api/cms/section-styles/hero?published=true");

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/cms/section-styles/hero")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "background_color": "#111" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_published"], false);

    let (status, body) = call!(app, published());
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/cms/section-styles/hero/publish")
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call!(app, published());
    assert_eq!(body["data"]["background_color"], "#111");
    assert_eq!(body["data"]["is_published"], true);
    assert_eq!(body["data"]["background"]["type"], "solid");
}

#[actix_web::test]
async fn anonymous_style_reads_create_nothing() {
    let app = app!();
    let token = login!(app);

    for key in ["junk0", "junk1", "junk2"] {
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri(&format!("/api/cms/section-styles/{key}"))
        );
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].is_null());
    }
    // an invalid token reads like an anonymous caller
    let (status, body) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/cms/section-styles/junk3")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let list = || {
        test::TestRequest::get()
            .uri("/api/cms/section-styles")
            .insert_header((header::AUTHORIZATION, token.as_str()))
    };
    let (_, body) = call!(app, list());
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (status, body) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/cms/section-styles/hero")
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["section_key"], "hero");
    assert_eq!(body["data"]["is_published"], false);

    let (_, body) = call!(app, list());
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn publishing_unknown_style_is_not_found() {
    let app = app!();
    let token = login!(app);
    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/cms/section-styles/nowhere/publish")
            .insert_header((header::AUTHORIZATION, token))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[actix_web::test]
async fn sections_reorder_by_id() {
    let app = app!();
    let token = login!(app);

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/cms/sections"));
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 9);

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/cms/sections/reorder")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "sections": [
                { "id": ids[2], "order_index": 0 },
                { "id": ids[0], "order_index": 1 },
            ]}))
    );
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["section_key"].as_str().unwrap())
        .collect();
    assert_eq!(&keys[..4], ["videos", "hero", "about", "Services"]);

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/cms/sections/reorder")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "sections": [{ "order_index": 0 }] }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/cms/sections/reorder")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "sections": [
                { "section_key": "faq", "order_index": 3 },
                { "section_key": "faq", "order_index": 4 },
            ]}))
    );
    assert_eq!(status, StatusCode::OK);
    let sections = body["data"].as_array().unwrap();
    assert_eq!(sections.len(), 10);
    assert_eq!(
        sections.iter().filter(|s| s["section_key"] == "faq").count(),
        1
    );
}

#[actix_web::test]
async fn tours_get_unique_slugs() {
    let app = app!();
    let token = login!(app);
    for _ in 0..2 {
        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/tours")
                .insert_header((header::AUTHORIZATION, token.as_str()))
                .set_json(json!({ "title": "Sahara Trek", "images": "/dunes.jpg" }))
        );
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/tours/slug/sahara-trek-2"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["images"], json!(["/dunes.jpg"]));

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/tours")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "title": "" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn duplicate_admin_is_conflict_and_self_delete_is_refused() {
    let app = app!();
    let token = login!(app);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/admins")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "username": ADMIN, "password": "another-pass" }))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (status, _) = call!(
        app,
        test::TestRequest::delete()
            .uri("/api/admins/1")
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn gallery_delete_only_hides_the_item() {
    let app = app!();
    let token = login!(app);

    let (_, media) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/cms/media")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "filename": "reef.jpg", "url": "/uploads/reef.jpg" }))
    );
    let (status, item) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/cms/gallery")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "media_id": media["data"]["id"], "title": "Reef" }))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/cms/gallery"));
    assert_eq!(body["data"][0]["url"], "/uploads/reef.jpg");

    let (status, _) = call!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/cms/gallery/{}", item["data"]["id"]))
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/cms/gallery"));
    assert!(body["data"].as_array().unwrap().is_empty());

    let (_, body) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/cms/gallery/all")
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(body["data"][0]["is_active"], false);
}

#[actix_web::test]
async fn settings_map_is_typed() {
    let app = app!();
    let token = login!(app);

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/cms/settings/max_guests")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "setting_value": "12", "setting_type": "number" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "created");

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/cms/settings"));
    assert_eq!(body["data"]["max_guests"], json!(12.0));

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/cms/settings/identity"));
    assert_eq!(body["data"]["maintenance_mode"], false);
}
