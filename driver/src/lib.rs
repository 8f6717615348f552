//! Volatile stores implementing the kernel's query and modifier interfaces.

pub mod database;
pub mod error;
