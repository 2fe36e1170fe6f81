//! Shared library for the events API Lambda functions.
//!
//! This crate provides common utilities, types, and clients used across the Lambda functions.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod staticfiles;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use http::parse_json_body;
pub use models::{ErrorDetail, Event, EventInput, EventMessage, Message};
pub use store::EventStore;
