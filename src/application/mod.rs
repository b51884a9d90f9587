/// Session token and single-flight token cache
pub mod auth;
/// Client facade implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouped by area
pub mod interfaces;
/// Concurrent and sequential page collection
pub mod paginator;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
