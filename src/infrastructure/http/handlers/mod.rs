//! HTTP Handlers

mod customer;
mod ping;

pub use customer::*;
pub use ping::*;
