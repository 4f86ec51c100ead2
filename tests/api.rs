use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use invoice_generator::api::{configure_routes, ApiState};
use invoice_generator::core::AppConfig;
use serde_json::{json, Value};

fn state_with(config: AppConfig) -> web::Data<ApiState> {
    web::Data::new(ApiState::new(config).unwrap())
}

fn invoice_json() -> Value {
    json!({
        "invoiceNo": "INV-7",
        "invoiceDate": "2025-03-15",
        "dueDate": "2025-04-14",
        "companyName": "Acme Ltd.",
        "companyAddress": "1 Road",
        "clientName": "Client Inc.",
        "clientAddress": "2 Avenue",
        "currency": "USD",
        "itemDescription": "Consulting",
        "quantity": 2,
        "unitPrice": "100.00"
    })
}

#[actix_web::test]
async fn health_reports_service_name() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"status": "ok", "service": "invoice-generator"}));
}

#[actix_web::test]
async fn json_invoice_downloads_as_pdf_attachment() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(invoice_json())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "application/pdf");
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("invoice_INV-7_"));
    assert!(disposition.contains(".pdf"));

    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF-"));
}

#[actix_web::test]
async fn missing_field_is_a_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let mut payload = invoice_json();
    payload.as_object_mut().unwrap().remove("clientName");

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("client_name"));
}

#[actix_web::test]
async fn api_key_is_required_when_configured() {
    let mut config = AppConfig::default();
    config.security.require_api_key = true;
    config.security.api_secret_key = Some("secret".to_string());

    let app = test::init_service(
        App::new()
            .app_data(state_with(config))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/receipt")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("X-API-Key", "secret"))
        .set_json(invoice_json())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn receipt_can_be_requested_as_png() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/receipt")
        .set_json(json!({
            "company_name": "Acme",
            "receipt_no": "R-1",
            "received_from": "Jane",
            "receipt_date": "15 March 2025",
            "currency": "EUR",
            "totalsum": "49.90",
            "description": "Workshop",
            "format": "png"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "image/png");
    let body = test::read_body(resp).await;
    assert!(image::load_from_memory(&body).is_ok());
}

#[actix_web::test]
async fn form_page_and_submission() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let html = test::call_and_read_body(&app, req).await;
    assert!(std::str::from_utf8(&html).unwrap().contains("Invoice Generator"));

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_form([
            ("invoice_no", "2025-55577"),
            ("invoice_date", "2025-03-15"),
            ("due_date", "2025-04-14"),
            ("company_name", "Your Company Ltd."),
            ("company_address", "123 Business Street"),
            ("client_name", "Client Company Inc."),
            ("client_address", "456 Client Avenue"),
            ("currency", "USD"),
            ("item_description", "Consulting"),
            ("quantity", "1"),
            ("unit_price", "5000.00"),
            ("tax_rate", "0"),
            ("discount", "0"),
            ("mark_paid", "yes"),
            ("format", "pdf"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "application/pdf");
}

#[actix_web::test]
async fn rate_limit_rejects_excess_requests() {
    let mut config = AppConfig::default();
    config.security.rate_limit_per_minute = 1;
    config.security.rate_limit_burst = 1;

    let app = test::init_service(
        App::new()
            .app_data(state_with(config))
            .configure(configure_routes),
    )
    .await;

    let first = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(invoice_json())
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

    let second = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(invoice_json())
        .to_request();
    assert_eq!(
        test::call_service(&app, second).await.status(),
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[actix_web::test]
async fn metrics_count_generated_documents() {
    let state = state_with(AppConfig::default());
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(invoice_json())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("documents_generated_total{kind=\"invoice\"} 1"));
}
