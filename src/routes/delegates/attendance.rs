use actix_web::{put, web, HttpRequest};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::delegate::{Attendance, Delegate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::access::require_edit;

#[put("/{id}/attendance")]
async fn set_attendance(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    body: web::Json<Attendance>,
) -> ApiResult<Delegate> {
    require_edit(&db, &req).await?;
    let id = Uuid::parse_str(&path)
        .map_err(|_| AppError::Validation("Invalid delegate ID format".into()))?;

    let updated = db.set_attendance(id, body.into_inner()).await?;

    Ok(ApiResponse::Ok(updated))
}
