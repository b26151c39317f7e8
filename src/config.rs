use std::env;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::errors::GatewayError;


pub const DEFAULT_GATEWAY_PORT: u16 = 3030;
pub const DEFAULT_AUTH_HOST: &str = "vacc-user1.uvm.edu";
pub const DEFAULT_AUTH_PORT: u16 = 22;
pub const AUTH_TIMEOUT_SECS: u64 = 15; // overall deadline per verification
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// How the remote host's identity is checked during the SSH handshake.
///
/// `TrustFirstUse` accepts whatever key the host presents, matching the
/// historical deployment. Setting `AUTH_SSH_HOST_KEY` switches to `Pinned`,
/// which refuses the session before any password is offered if the
/// presented key differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKeyPolicy {
    TrustFirstUse,
    Pinned(Vec<u8>),
}

impl HostKeyPolicy {
    /// Builds a pinned policy from the base64 encoding of the raw host key.
    pub fn pinned_from_base64(encoded: &str) -> Result<Self, GatewayError> {
        let key = BASE64
            .decode(encoded.trim())
            .map_err(|e| GatewayError::Config(format!("bad AUTH_SSH_HOST_KEY: {}", e)))?;
        if key.is_empty() {
            return Err(GatewayError::Config("AUTH_SSH_HOST_KEY is empty".to_string()));
        }
        Ok(Self::Pinned(key))
    }
}

#[derive(Debug, Clone)]
pub struct SshAuthConfig {
    pub host: String,
    pub port: u16,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub host_key_policy: HostKeyPolicy,
}

impl SshAuthConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(AUTH_TIMEOUT_SECS),
            host_key_policy: HostKeyPolicy::TrustFirstUse,
        }
    }

    /// Reads the deployment configuration once at startup. Invalid values
    /// are fatal here rather than surfacing as per-request errors.
    pub fn from_env() -> Result<Self, GatewayError> {
        let host = env::var("AUTH_SSH_HOST").unwrap_or_else(|_| DEFAULT_AUTH_HOST.to_string());

        let port = match env::var("AUTH_SSH_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| GatewayError::Config(format!("bad AUTH_SSH_PORT: {}", raw)))?,
            Err(_) => DEFAULT_AUTH_PORT,
        };

        let timeout_secs = match env::var("AUTH_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| GatewayError::Config(format!("bad AUTH_TIMEOUT_SECS: {}", raw)))?,
            Err(_) => AUTH_TIMEOUT_SECS,
        };

        let host_key_policy = match env::var("AUTH_SSH_HOST_KEY") {
            Ok(encoded) => HostKeyPolicy::pinned_from_base64(&encoded)?,
            Err(_) => HostKeyPolicy::TrustFirstUse,
        };

        Ok(Self {
            host,
            port,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(timeout_secs),
            host_key_policy,
        })
    }
}

pub fn gateway_port() -> Result<u16, GatewayError> {
    match env::var("GATEWAY_PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| GatewayError::Config(format!("bad GATEWAY_PORT: {}", raw))),
        Err(_) => Ok(DEFAULT_GATEWAY_PORT),
    }
}
