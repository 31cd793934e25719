use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{http::header, HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    Created(T),
    /// Downloadable body, never cached.
    Attachment {
        content_type: &'static str,
        filename: String,
        body: Vec<u8>,
    },
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Created(v) => HttpResponse::Created()
                .json(v),
            ApiResponse::Attachment { content_type, filename, body } => HttpResponse::Ok()
                .content_type(content_type)
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ))
                .insert_header((header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"))
                .insert_header((header::PRAGMA, "no-cache"))
                .insert_header((header::EXPIRES, "0"))
                .body(body),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
