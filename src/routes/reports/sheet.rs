use actix_web::{get, web};
use chrono::Utc;
use std::sync::Arc;

use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::delegation::report::build_report;
use crate::delegation::sheet::to_csv;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/attendance-sheet")]
async fn sheet(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<()> {
    let layout = config().report_layout;
    let all = db.list_delegates().await?;
    let rows = build_report(&all, layout);

    Ok(ApiResponse::Attachment {
        content_type: "text/csv; charset=utf-8",
        filename: format!("attendance-sheet-{}.csv", Utc::now().format("%Y-%m-%d")),
        body: to_csv(&rows, layout).into_bytes(),
    })
}
