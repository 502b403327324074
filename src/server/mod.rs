//! HTTP API for browser front-ends

pub mod api;
