use axum::http::Uri;
use axum::Router;
use lambda_http::RequestExt;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::util::MapRequest;

use crate::app::build_router;
use crate::error::ServerError;
use crate::{AppConfig, Mode};

/// Build the router once and hand it to the entrypoint for `config.mode`.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let router = build_router(&config);

    match config.mode {
        Mode::EventDriven => serve_lambda(router).await,
        Mode::StandaloneServer => serve_local(router, config.listen_addr()).await,
    }
}

/// Bind `addr` and serve until the process is killed.
pub async fn serve_local(router: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve_listener(listener, router).await
}

pub async fn serve_listener(listener: TcpListener, router: Router) -> Result<(), ServerError> {
    let addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(ServerError::Serve)
}

/// The router as registered with the Lambda runtime.
pub type LambdaService = MapRequest<Router, fn(lambda_http::Request) -> lambda_http::Request>;

pub fn lambda_service(router: Router) -> LambdaService {
    MapRequest::new(router, route_on_event_path as fn(_) -> _)
}

/// Point the request URI at the path carried by the proxy event.
///
/// The adapter prefixes API Gateway's stage name (`/prod/health`); routes
/// are registered without it. Requests with no event path pass through.
pub fn route_on_event_path(mut req: lambda_http::Request) -> lambda_http::Request {
    let raw_path = req.raw_http_path();
    if raw_path.is_empty() {
        return req;
    }

    let path_and_query = match req.uri().query() {
        Some(query) => format!("{}?{}", raw_path, query),
        None => raw_path.to_string(),
    };

    match path_and_query.parse::<Uri>() {
        Ok(uri) => *req.uri_mut() = uri,
        Err(e) => tracing::warn!(path = %path_and_query, error = %e, "Unroutable event path"),
    }
    req
}

/// Register the router with the Lambda runtime. The runtime owns the
/// transport and translates each proxy event into a request for `router`.
pub async fn serve_lambda(router: Router) -> Result<(), ServerError> {
    tracing::info!("Handing router to the Lambda runtime");
    lambda_http::run(lambda_service(router)).await?;
    Ok(())
}
