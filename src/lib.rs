pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::{HostKeyPolicy, SshAuthConfig};
pub use errors::GatewayError;
pub use models::{Envelope, Status};
