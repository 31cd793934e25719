use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::delegation::filter::{delegate_stats, filter_options};
use crate::types::delegate::StatsRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/stats")]
async fn stats(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<StatsRes> {
    let all = db.list_delegates().await?;

    Ok(ApiResponse::Ok(StatsRes {
        stats: delegate_stats(&all),
        options: filter_options(&all),
    }))
}
