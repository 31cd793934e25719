pub mod allowed_users;
pub mod sample_delegates;
