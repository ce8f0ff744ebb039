pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod mcp;
pub mod provider;
pub mod server;
pub mod tools;

pub use auth::ApiKeyAuth;
pub use config::YokatlasConfig;
pub use error::{Result, YokatlasError};
pub use server::YokatlasServer;
