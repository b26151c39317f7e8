use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    Config(String),
    Connect(String),
    Handshake(String),
    HostKeyMismatch,
    CredentialRejected(String),
    Timeout,
    Internal(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid configuration: {}", e),
            Self::Connect(e) => write!(f, "Could not reach authentication host: {}", e),
            Self::Handshake(e) => write!(f, "SSH handshake failed: {}", e),
            Self::HostKeyMismatch => write!(f, "Host key verification failed"),
            Self::CredentialRejected(e) => write!(f, "Authentication failed: {}", e),
            Self::Timeout => write!(f, "Authentication timed out"),
            Self::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for GatewayError {}
