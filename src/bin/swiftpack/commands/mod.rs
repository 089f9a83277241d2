//! Command implementations

pub mod check;
pub mod completions;
pub mod init;
pub mod layout;
pub mod plan;
pub mod targets;
