use actix_web::HttpRequest;
use tracing::warn;

use crate::db::database_service::DatabaseService;
use crate::types::access::{AccessMode, AccessTier};
use crate::types::error::AppError;
use crate::utils::webutils::identity_email;

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Maps a signed-in email to an access tier. Anyone not on the allow-list,
/// or anyone we cannot check right now, gets view-only.
pub async fn resolve_access(db: &DatabaseService, email: Option<&str>) -> AccessMode {
    let Some(email) = email.map(normalize_email).filter(|e| !e.is_empty()) else {
        return AccessMode { mode: AccessTier::View, email: None };
    };

    let mode = match db.is_allowed(&email).await {
        Ok(true) => AccessTier::Edit,
        Ok(false) => AccessTier::View,
        Err(e) => {
            warn!("access check for {} failed: {}", email, e);
            AccessTier::View
        }
    };
    AccessMode { mode, email: Some(email) }
}

pub async fn request_access(db: &DatabaseService, req: &HttpRequest) -> AccessMode {
    resolve_access(db, identity_email(req).as_deref()).await
}

/// Gate for every mutating route. Returns the caller's email.
pub async fn require_edit(db: &DatabaseService, req: &HttpRequest) -> Result<String, AppError> {
    let access = request_access(db, req).await;
    if !access.can_edit() {
        return Err(AppError::view_only());
    }
    access.email.ok_or_else(AppError::view_only)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Admin@Example.COM "), "admin@example.com");
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn only_edit_tier_can_edit() {
        let edit = AccessMode { mode: AccessTier::Edit, email: Some("a@example.com".into()) };
        let view = AccessMode { mode: AccessTier::View, email: Some("a@example.com".into()) };
        assert!(edit.can_edit());
        assert!(!view.can_edit());
    }
}
