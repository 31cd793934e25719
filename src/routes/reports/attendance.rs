use actix_web::{get, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::delegation::report::{build_report, TeamRow};
use crate::types::response::{ApiResponse, ApiResult};

/// Team rows for an external sheet renderer.
#[get("/attendance")]
async fn attendance(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<TeamRow>> {
    let all = db.list_delegates().await?;
    Ok(ApiResponse::Ok(build_report(&all, config().report_layout)))
}
