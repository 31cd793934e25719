use actix_web::{delete, web, HttpRequest};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::delegate::DeleteRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::access::require_edit;

#[delete("/{id}")]
async fn delete_delegate(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<DeleteRes> {
    require_edit(&db, &req).await?;
    let id = Uuid::parse_str(&path)
        .map_err(|_| AppError::Validation("Invalid delegate ID format".into()))?;

    db.delete_delegate(id).await?;

    Ok(ApiResponse::Ok(DeleteRes { deleted_count: 1 }))
}
