//! 应用层 - 命令（写操作）

mod customer_commands;

pub mod handlers;

pub use customer_commands::*;
