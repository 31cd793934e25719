pub mod access;
pub mod delegate;
pub mod error;
pub mod response;
