use actix_web::{post, web};
use std::sync::Arc;
use tracing::warn;

use crate::db::database_service::DatabaseService;
use crate::delegation::sample::sample_teams;
use crate::types::delegate::SampleSeedRes;
use crate::types::response::{ApiResponse, ApiResult};

/// Replaces every delegate with the demo teams. Destructive.
#[post("/sample-delegates")]
async fn seed_samples(db: web::Data<Arc<DatabaseService>>) -> ApiResult<SampleSeedRes> {
    warn!("replacing all delegates with sample data");
    let res = db.replace_all_delegates(sample_teams()).await?;

    Ok(ApiResponse::Created(res))
}
