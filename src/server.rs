//! HTTP boundary: routes the two placeholder URL shapes into the render
//! pipeline and applies the cache policy.

use crate::config::ServerConfig;
use crate::render::render_placeholder;
use crate::request::{PlaceholderParams, ValidationError};
use anyhow::Context;
use axum::{
    Router,
    extract::{
        Path, Query, Request, State,
        path::ErrorKind,
        rejection::PathRejection,
    },
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Deserialize)]
struct PlaceholderPath {
    width: String,
    height: String,
    #[serde(default)]
    color: Option<String>,
}

/// Option keys taken from the query string. Repeated keys keep their first value.
#[derive(Debug, Default)]
struct PlaceholderQuery {
    r: Option<String>,
    d: Option<String>,
    g: Option<String>,
    t: Option<String>,
}

impl PlaceholderQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "r" => &mut query.r,
                "d" => &mut query.d,
                "g" => &mut query.g,
                "t" => &mut query.t,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/{width}/{height}", get(placeholder))
        .route("/{width}/{height}/{color}", get(placeholder))
        .layer(middleware::from_fn(log_requests))
        .with_state(Arc::new(config))
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, environment = ?config.environment, "server starting");

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn placeholder(
    State(config): State<Arc<ServerConfig>>,
    path: Result<Path<PlaceholderPath>, PathRejection>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let path = match path {
        Ok(Path(path)) => path,
        Err(rejection) => match segment_error(&rejection) {
            Some(err) => {
                tracing::warn!(error = %err, cause = %rejection, "rejected placeholder path");
                return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
            }
            None => return rejection.into_response(),
        },
    };
    let query = PlaceholderQuery::from_pairs(pairs);
    let params = PlaceholderParams {
        width: path.width,
        height: path.height,
        color: path.color,
        radius: query.r,
        dots: query.d,
        gradient: query.g,
        label: query.t,
    };

    match render_placeholder(&params) {
        Ok(svg) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/svg+xml".to_string()),
                (header::CACHE_CONTROL, config.cache_policy().header_value()),
            ],
            svg,
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(
                width = %params.width,
                height = %params.height,
                color = ?params.color,
                error = %err,
                "rejected placeholder request"
            );
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
    }
}

/// Segments that do not decode to UTF-8 cannot be numbers or hex, so they
/// fail the same way a bad value would. The router reports the first such
/// segment in width, height, color order.
fn segment_error(rejection: &PathRejection) -> Option<ValidationError> {
    let PathRejection::FailedToDeserializePathParams(failed) = rejection else {
        return None;
    };
    match failed.kind() {
        ErrorKind::InvalidUtf8InPathParam { key, .. } => match key.as_str() {
            "width" => Some(ValidationError::InvalidWidth),
            "height" => Some(ValidationError::InvalidHeight),
            "color" => Some(ValidationError::InvalidColor),
            _ => None,
        },
        _ => None,
    }
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );
    response
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
