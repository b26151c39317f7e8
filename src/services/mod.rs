use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use ssh2::Session;
use tokio::time::timeout;

use crate::config::{HostKeyPolicy, SshAuthConfig};
use crate::errors::GatewayError;


/// Verifies a username/password pair by opening an SSH session to the
/// configured login host and attempting password authentication.
///
/// libssh2 is blocking, so the whole attempt runs on the blocking pool and
/// is bounded by the configured deadline; a slow or silent host can never
/// wedge the async executor. Exactly one attempt is made per call.
pub async fn verify_credentials(
    cfg: &SshAuthConfig,
    username: &str,
    password: &str,
) -> Result<(), GatewayError> {
    let deadline = cfg.timeout;
    let cfg = cfg.clone();
    let username = username.to_owned();
    let password = password.to_owned();

    let attempt = tokio::task::spawn_blocking(move || password_login(&cfg, &username, &password));

    match timeout(deadline, attempt).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(GatewayError::Internal(e.to_string())),
        Err(_) => Err(GatewayError::Timeout),
    }
}

fn password_login(cfg: &SshAuthConfig, username: &str, password: &str) -> Result<(), GatewayError> {
    let addr = (cfg.host.as_str(), cfg.port)
        .to_socket_addrs()
        .map_err(|e| GatewayError::Connect(e.to_string()))?
        .next()
        .ok_or_else(|| GatewayError::Connect(format!("no address found for {}", cfg.host)))?;

    let stream = TcpStream::connect_timeout(&addr, cfg.connect_timeout)
        .map_err(|e| GatewayError::Connect(e.to_string()))?;

    let mut session = Session::new().map_err(|e| GatewayError::Handshake(e.to_string()))?;
    session.set_timeout(session_timeout_ms(cfg.timeout));
    session.set_tcp_stream(stream);
    session
        .handshake()
        .map_err(|e| GatewayError::Handshake(e.to_string()))?;

    check_host_key(&session, &cfg.host_key_policy)?;

    session
        .userauth_password(username, password)
        .map_err(|e| GatewayError::CredentialRejected(e.to_string()))?;

    if session.authenticated() {
        Ok(())
    } else {
        Err(GatewayError::CredentialRejected(
            "server refused the credential".to_string(),
        ))
    }
}

// libssh2 takes its timeout in milliseconds as a u32; clamp rather than
// truncate when the configured deadline overflows that.
fn session_timeout_ms(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

// The host key is checked after the handshake but before any credential is
// offered, so a mismatched host never sees a password.
fn check_host_key(session: &Session, policy: &HostKeyPolicy) -> Result<(), GatewayError> {
    match policy {
        HostKeyPolicy::TrustFirstUse => Ok(()),
        HostKeyPolicy::Pinned(expected) => {
            let (key, _) = session
                .host_key()
                .ok_or_else(|| GatewayError::Handshake("server presented no host key".to_string()))?;
            if key == expected.as_slice() {
                Ok(())
            } else {
                Err(GatewayError::HostKeyMismatch)
            }
        }
    }
}
