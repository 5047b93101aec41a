//! Core types and trait definitions for the salary tracker.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! (`salary-store-sqlite`) and the JSON API (`salary-api`) both build on it.

pub mod derive;
pub mod error;
pub mod input;
pub mod record;
pub mod store;

pub use error::{Error, Result};
