//! View state for the admin client.
//!
//! Each view owns one state value changed only through its `apply` method,
//! so every transition can be exercised without a network or a renderer.

pub mod dashboard;
pub mod decline;
pub mod notice;
pub mod tenant;
