//! Query Handlers 实现

mod customer_handlers;

pub use customer_handlers::*;
