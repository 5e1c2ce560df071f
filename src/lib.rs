//! Action group adapter bridging Bedrock agent invocations to the booking
//! REST backend.
//!
//! The agent runtime delivers an invocation envelope (apiPath, httpMethod,
//! positional parameters, optional JSON request body). The adapter routes it
//! to one of five backend operations, performs a single outbound HTTP call,
//! and wraps the outcome back into the response envelope the runtime expects.

pub mod config;
pub mod handler;
pub mod http;
pub mod models;
pub mod ops;
pub mod payload;
pub mod routes;
