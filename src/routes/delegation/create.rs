use actix_web::{post, web, HttpRequest};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::delegation::intake::validate_delegation;
use crate::types::delegate::{DelegationCreateRes, RDelegationCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::access::require_edit;

#[post("")]
async fn create(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RDelegationCreate>,
) -> ApiResult<DelegationCreateRes> {
    require_edit(&db, &req).await?;

    // reject before touching the store
    let records = validate_delegation(&body)?;
    let created = db.insert_delegation(records).await?;

    Ok(ApiResponse::Created(created))
}
