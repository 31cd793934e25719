pub mod attendance;
pub mod delete;
pub mod list;
pub mod stats;
