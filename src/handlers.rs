use std::convert::Infallible;
use std::sync::Arc;

use hyper::StatusCode;
use serde_json::json;

use crate::config::SshAuthConfig;
use crate::models::Envelope;
use crate::services::verify_credentials;


pub async fn authenticate(
    username: String,
    password: String,
    cfg: Arc<SshAuthConfig>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let envelope = match verify_credentials(&cfg, &username, &password).await {
        Ok(()) => Envelope::success("Authentication successful"),
        Err(e) => {
            log::warn!("auth attempt for {} failed: {}", username, e);
            Envelope::error(e.to_string())
        }
    };
    // Errors keep HTTP 200; clients branch on the envelope's status field.
    Ok(warp::reply::json(&envelope))
}

pub async fn query(
    country: String,
    format: String,
    start: String,
    end: String,
    keywords: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let content = json!({
        "country": country,
        "format": format,
        "start": start,
        "end": end,
        "keywords": keywords,
    });
    Ok(warp::reply::json(&Envelope::success_with(
        "Query successful",
        content,
    )))
}

pub async fn topic(
    embedding: String,
    dimred: String,
    clustering: String,
    vectorizer: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let content = json!({
        "embedding": embedding,
        "dimred": dimred,
        "clustering": clustering,
        "vectorizer": vectorizer,
    });
    Ok(warp::reply::json(&Envelope::success_with(
        "Topic modeling successful",
        content,
    )))
}

pub async fn ngram(
    country: String,
    start: String,
    end: String,
    keywords: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let content = json!({
        "country": country,
        "start": start,
        "end": end,
        "keywords": keywords,
    });
    Ok(warp::reply::json(&Envelope::success_with(
        "Ngram successful",
        content,
    )))
}

pub async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(warp::reply::with_status(message.to_string(), code))
}
