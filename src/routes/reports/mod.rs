pub mod attendance;
pub mod sheet;
