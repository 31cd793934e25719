pub mod config;
pub mod db;
pub mod delegation;
pub mod routes;
pub mod types;
pub mod utils;
