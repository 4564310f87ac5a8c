use std::net::SocketAddr;

/// Startup and serving failures. Request handlers never fail.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),

    #[error("lambda runtime failed: {0}")]
    Lambda(#[from] lambda_http::Error),
}
