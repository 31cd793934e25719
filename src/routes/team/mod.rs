pub mod delete;
pub mod members;
