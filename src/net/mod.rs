//! REST data access for the admin client.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
