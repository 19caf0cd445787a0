//! Headless admin client for a property-management REST API.
//!
//! Views are modelled as plain state values (`state`) advanced by events, with
//! async page drivers (`pages`) that perform the network calls through the
//! [`net::api::PropertyApi`] seam using an explicit [`config::Session`].

pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
