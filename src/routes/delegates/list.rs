use actix_web::{get, web};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::delegation::filter::{apply_filter, AttendanceFilter, DelegateFilter, SortBy, SortOrder};
use crate::types::delegate::DelegateListRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    /// comma separated team ids
    pub teams: Option<String>,
    /// comma separated, so category names cannot contain commas here
    pub categories: Option<String>,
    pub attendance: Option<AttendanceFilter>,
    pub sort_by: Option<SortBy>,
    pub order: Option<SortOrder>,
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default().split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl TryFrom<ListQuery> for DelegateFilter {
    type Error = AppError;

    fn try_from(q: ListQuery) -> Result<Self, Self::Error> {
        let teams = split_list(q.teams.as_deref())
            .map(|t| t.parse::<i32>().map_err(|_| AppError::BadRequest(format!("invalid team id: {t}"))))
            .collect::<Result<HashSet<_>, _>>()?;
        let categories = split_list(q.categories.as_deref()).map(str::to_string).collect();

        Ok(DelegateFilter {
            search: q.search,
            teams,
            categories,
            attendance: q.attendance.unwrap_or_default(),
            sort_by: q.sort_by.unwrap_or_default(),
            order: q.order.unwrap_or_default(),
        })
    }
}

#[get("")]
async fn list(
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<ListQuery>,
) -> ApiResult<DelegateListRes> {
    let filter = DelegateFilter::try_from(query.into_inner())?;
    let all = db.list_delegates().await?;
    let delegates = apply_filter(&all, &filter);

    Ok(ApiResponse::Ok(DelegateListRes {
        delegates,
        total_count: all.len(),
        filtered: filter.is_active(),
    }))
}
