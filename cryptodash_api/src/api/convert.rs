use actix_web::{HttpResponse, Responder};
use actix_web::http::header::ContentType;
use log::error;
use serde::Serialize;
use snafu::{Snafu, ResultExt};

use crate::api::models::ErrorResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const NOT_FOUND_MESSAGE: &str = "Not found";

pub trait ToResponse {
    type Output : Responder;
    fn to_response(&self) -> Self::Output;
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum ApiError {
    #[snafu(display("Failed to serialize response body: {}", source))]
    Serialization {
        source: serde_json::Error,
    },
}

impl ToResponse for ApiError {
    type Output = HttpResponse;
    fn to_response(&self) -> Self::Output {
        error!("Request failed: {}", self);
        internal_error()
    }
}

pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE))
}

pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(NOT_FOUND_MESSAGE))
}

/// Serializes up front so a failure becomes a logged 500 with a generic body
/// instead of leaking the serializer's message.
pub fn json_ok<T: Serialize>(value: &T) -> HttpResponse {
    match serde_json::to_vec(value).context(Serialization) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(e) => e.to_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use super::*;

    #[actix_web::test]
    async fn unserializable_body_becomes_generic_500() {
        // JSON object keys must be strings
        let mut value = HashMap::new();
        value.insert(vec![1u8], 1);

        let response = json_ok(&value);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Internal server error"}"#);
    }

    #[actix_web::test]
    async fn json_ok_sets_content_type() {
        let response = json_ok(&vec![1, 2, 3]);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json");

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], b"[1,2,3]");
    }
}
