use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;

/// Header the sign-in proxy uses to pass the authenticated Google account.
pub const IDENTITY_HEADER: &str = "X-Forwarded-Email";

pub fn identity_email(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(IDENTITY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Only the sign-in proxy may talk to us.
pub async fn validate_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if credentials.token() == config().proxy_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}

pub async fn validate_admin_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if credentials.token() == config().admin_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
