//! HTTP API server module

pub mod api;
