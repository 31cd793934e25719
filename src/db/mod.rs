pub mod allowed_users;
pub mod database_service;
pub mod delegates;
