#![allow(dead_code)]

use actix_web::{web, App};
use delegate_attendance::{
    config::{EnvConfig, CONFIG},
    db::database_service::DatabaseService,
    delegation::report::ReportLayout,
    types::{
        access::AllowedUserEntry,
        delegate::{DelegateSlot, HeadSlot, RDelegationCreate},
    },
};
use std::sync::Arc;
use tempfile::TempDir;

pub const PROXY_KEY: &str = "test_proxy_key";
pub const ADMIN_KEY: &str = "test_admin_key";
pub const EDITOR: &str = "editor@example.com";
pub const VIEWER: &str = "viewer@example.com";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub _dir: TempDir,
}

impl TestContext {
    /// Fresh SQLite database with migrations applied and one editor on the
    /// allow-list.
    pub async fn new() -> TestContext {
        let _ = CONFIG.set(get_test_config());

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        db.seed_allowed_users(vec![AllowedUserEntry {
            email: EDITOR.to_string(),
            name: Some("Editor".to_string()),
        }])
        .await
        .expect("Failed to seed allow-list");

        TestContext { db, _dir: dir }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(delegate_attendance::routes::configure_routes)
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        admin_key: ADMIN_KEY.to_string(),
        proxy_key: PROXY_KEY.to_string(),
        report_layout: ReportLayout::Compact,
    }
}

pub fn proxy_auth() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", PROXY_KEY))
}

pub fn as_user(email: &str) -> (&'static str, String) {
    ("X-Forwarded-Email", email.to_string())
}

// Test data helpers
pub mod test_data {
    use super::*;

    pub fn delegation(head: &str, others: &[(&str, bool)]) -> RDelegationCreate {
        RDelegationCreate {
            head: HeadSlot { name: head.to_string(), category: None },
            slots: others
                .iter()
                .map(|(name, included)| DelegateSlot {
                    name: name.to_string(),
                    category: None,
                    included: *included,
                })
                .collect(),
        }
    }

    pub fn delegation_with_categories(members: &[(&str, Option<&str>)]) -> RDelegationCreate {
        let (head, rest) = members.split_first().expect("at least one member");
        RDelegationCreate {
            head: HeadSlot { name: head.0.to_string(), category: head.1.map(String::from) },
            slots: rest
                .iter()
                .map(|(name, category)| DelegateSlot {
                    name: name.to_string(),
                    category: category.map(String::from),
                    included: true,
                })
                .collect(),
        }
    }
}
