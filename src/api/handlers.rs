use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Local;
use serde_json::json;
use std::time::Instant;

use crate::core::DocumentResult;
use crate::generators::DocumentAssembler;
use crate::models::{DocumentKind, InvoiceFields, ReceiptFields, RenderedDocument};
use super::error::{ApiError, ApiResult};
use super::middleware::auth::check_api_key;
use super::state::ApiState;

pub const SERVICE_NAME: &str = "invoice-generator";

/// Formulario HTML con las fechas precargadas
pub async fn invoice_form(state: web::Data<ApiState>) -> ApiResult<HttpResponse> {
    let html = state.form.render(Local::now().date_naive())?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Envío del formulario HTML
pub async fn generate_from_form(
    req: HttpRequest,
    form: web::Form<InvoiceFields>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    check_rate_limit(&req, &state)?;

    let fields = form.into_inner();
    let output = fields.format;
    render_blocking(&state, DocumentKind::Invoice, move |assembler| {
        assembler.assemble_invoice(&fields, output)
    })
    .await
}

/// Factura desde JSON
pub async fn generate_invoice(
    req: HttpRequest,
    body: web::Json<InvoiceFields>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    check_api_key(&req, state.config.required_api_key())?;
    check_rate_limit(&req, &state)?;

    let fields = body.into_inner();
    let output = fields.format;
    render_blocking(&state, DocumentKind::Invoice, move |assembler| {
        assembler.assemble_invoice(&fields, output)
    })
    .await
}

/// Recibo desde JSON
pub async fn generate_receipt(
    req: HttpRequest,
    body: web::Json<ReceiptFields>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    check_api_key(&req, state.config.required_api_key())?;
    check_rate_limit(&req, &state)?;

    let fields = body.into_inner();
    let output = fields.format;
    render_blocking(&state, DocumentKind::Receipt, move |assembler| {
        assembler.assemble_receipt(&fields, output)
    })
    .await
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

pub async fn metrics_endpoint(state: web::Data<ApiState>) -> ApiResult<HttpResponse> {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = state.metrics.gather();
    let mut buffer = vec![];

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}

/// El renderizado es trabajo de CPU: se ejecuta en el pool bloqueante
async fn render_blocking<F>(
    state: &ApiState,
    kind: DocumentKind,
    job: F,
) -> ApiResult<HttpResponse>
where
    F: FnOnce(&DocumentAssembler) -> DocumentResult<RenderedDocument> + Send + 'static,
{
    let assembler = state.assembler.clone();
    let start = Instant::now();

    let document = tokio::task::spawn_blocking(move || job(&assembler)).await??;

    state.metrics.record(kind, start.elapsed());
    Ok(attachment(document))
}

fn attachment(document: RenderedDocument) -> HttpResponse {
    let filename = document.suggested_filename(Local::now().naive_local());

    HttpResponse::Ok()
        .content_type(document.media_type())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(document.bytes)
}

fn check_rate_limit(req: &HttpRequest, state: &ApiState) -> ApiResult<()> {
    let client = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if state.rate_limiter.check_key(&client).is_err() {
        tracing::warn!(client = %client, "Límite de peticiones excedido");
        return Err(ApiError::too_many_requests("Rate limit exceeded"));
    }
    Ok(())
}
