pub mod app;
pub mod config;
pub mod error;
pub mod mode;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use config::AppConfig;
pub use error::ServerError;
pub use mode::Mode;

#[derive(Clone)]
pub struct AppState {
    pub running_message: String,
}
