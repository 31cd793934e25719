use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::delegate::Delegate;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{team_id}")]
async fn members(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<Delegate>> {
    let team = db.list_team(path.into_inner()).await?;
    if team.is_empty() {
        return Err(AppError::NotFound("Team not found".into()));
    }
    Ok(ApiResponse::Ok(team))
}
