use std::sync::Arc;

use hyper::{HeaderMap, Method, StatusCode};
use warp::Filter;

use crate::config::SshAuthConfig;
use crate::handlers;
use crate::middleware::add_cors_headers;


/// The routing table: greeting, SSH-backed auth, and the three echo routes
/// standing in for the corpus analysis backends.
pub fn routes(
    auth_cfg: Arc<SshAuthConfig>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let cfg_filter = warp::any().map(move || auth_cfg.clone());

    let hello = warp::path::end().and(warp::get()).map(|| "Hello, World!");

    let auth = warp::path!("auth" / String / String)
        .and(warp::get())
        .and(cfg_filter)
        .and_then(handlers::authenticate);

    let query = warp::path!("query" / String / String / String / String / String)
        .and(warp::get())
        .and_then(handlers::query);

    let topic = warp::path!("topic" / String / String / String / String)
        .and(warp::get())
        .and_then(handlers::topic);

    let ngram = warp::path!("ngram" / String / String / String / String)
        .and(warp::get())
        .and_then(handlers::ngram);

    hello.or(auth).or(query).or(topic).or(ngram)
}

/// Full gateway filter: routes, preflight handling, rejection recovery, and
/// CORS headers on every response. `main` serves exactly this; tests drive
/// it through `warp::test`.
pub fn gateway(
    auth_cfg: Arc<SshAuthConfig>,
) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    // Rejects with not-found rather than method-not-allowed so unmatched
    // GETs still fall through to a plain 404.
    let preflight = warp::method().and_then(|method: Method| async move {
        if method == Method::OPTIONS {
            Ok(StatusCode::NO_CONTENT)
        } else {
            Err(warp::reject::not_found())
        }
    });

    let mut cors = HeaderMap::new();
    add_cors_headers(&mut cors);

    routes(auth_cfg)
        .or(preflight)
        .recover(handlers::handle_rejection)
        .with(warp::reply::with::headers(cors))
}
