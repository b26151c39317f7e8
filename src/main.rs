use std::sync::Arc;

use corpus_gateway::config::{self, SshAuthConfig};
use corpus_gateway::routes::gateway;
use warp::Filter;

#[tokio::main]
async fn main() {
    env_logger::init();

    let auth_cfg = match SshAuthConfig::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "verifying credentials against {}:{} ({})",
        auth_cfg.host,
        auth_cfg.port,
        match auth_cfg.host_key_policy {
            corpus_gateway::HostKeyPolicy::TrustFirstUse => "trust-on-first-use",
            corpus_gateway::HostKeyPolicy::Pinned(_) => "pinned host key",
        }
    );

    let port = match config::gateway_port() {
        Ok(port) => port,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let api = gateway(auth_cfg).with(warp::log("corpus_gateway"));

    println!("Corpus gateway running on http://127.0.0.1:{}", port);
    warp::serve(api).run(([127, 0, 0, 1], port)).await;
}
