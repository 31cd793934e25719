pub mod access;
pub mod webutils;
