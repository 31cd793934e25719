use std::env;
use std::sync::OnceLock;

use crate::delegation::report::ReportLayout;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub admin_key: String,
    pub proxy_key: String,
    pub report_layout: ReportLayout,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("DATABASE_URL");

        let report_layout = env::var("REPORT_COLUMNS")
            .ok()
            .and_then(|v| ReportLayout::from_columns(v.trim().parse().ok()?))
            .unwrap_or_default();

        EnvConfig {
            port: env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8080),
            db_url,
            admin_key: Self::get_env("ADMIN_KEY"),
            proxy_key: Self::get_env("PROXY_KEY"),
            report_layout,
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
