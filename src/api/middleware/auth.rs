use actix_web::http::header::Header;
use actix_web::HttpRequest;
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};

use crate::api::error::{ApiError, ApiResult};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Comprueba la clave de API cuando hay una configurada.
///
/// Se acepta la cabecera `X-API-Key` o, para clientes que solo envían
/// credenciales estándar, `Authorization: Bearer <clave>`.
pub fn check_api_key(req: &HttpRequest, expected: Option<&str>) -> ApiResult<()> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            Authorization::<Bearer>::parse(req)
                .ok()
                .map(|auth| auth.into_scheme().token().to_string())
        });

    match provided {
        Some(key) if key == expected => Ok(()),
        Some(_) => {
            tracing::warn!(path = %req.path(), "Clave de API inválida");
            Err(ApiError::unauthorized("Invalid API key"))
        }
        None => Err(ApiError::unauthorized("Missing API key")),
    }
}
