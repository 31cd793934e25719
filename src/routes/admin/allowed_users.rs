use actix_web::{post, put, web};
use std::sync::Arc;
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::access::{AllowedUserEntry, AllowedUsersSeedRes, RAllowedUsersSeed};
use crate::types::response::{ApiResponse, ApiResult};

/// Replaces the allow-list wholesale.
#[put("/allowed-users")]
async fn seed(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RAllowedUsersSeed>,
) -> ApiResult<AllowedUsersSeedRes> {
    let emails = db.seed_allowed_users(body.into_inner().users).await?;
    info!("seeded {} allowed users", emails.len());

    Ok(ApiResponse::Ok(AllowedUsersSeedRes {
        inserted_count: emails.len(),
        emails,
    }))
}

#[post("/allowed-users")]
async fn add(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<AllowedUserEntry>,
) -> ApiResult<AllowedUsersSeedRes> {
    let email = db.add_allowed_user(body.into_inner()).await?;

    Ok(ApiResponse::Created(AllowedUsersSeedRes {
        inserted_count: 1,
        emails: vec![email],
    }))
}
