//! HTTP server for the tracker service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod request;
pub mod response;

pub use config::{CliArgs, ServerConfig};
pub use http::TrackerServer;
