use actix_web::{get, web, HttpRequest};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::access::AccessMode;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::access::request_access;

#[get("")]
async fn access(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<AccessMode> {
    Ok(ApiResponse::Ok(request_access(&db, &req).await))
}
