use actix_web::{delete, web, HttpRequest};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::delegate::DeleteRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::access::require_edit;

#[delete("/{team_id}")]
async fn delete_team(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<DeleteRes> {
    require_edit(&db, &req).await?;
    let team_id: i32 = path
        .parse()
        .map_err(|_| AppError::Validation("Invalid team ID".into()))?;

    let deleted_count = db.delete_team(team_id).await?;

    Ok(ApiResponse::Ok(DeleteRes { deleted_count }))
}
