//! HTTP client for the shop-management order API.

pub mod client;

pub use client::{OrderSourceClient, SourceError};
