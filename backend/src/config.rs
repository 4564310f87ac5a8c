use std::net::SocketAddr;

use crate::mode::Mode;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SERVICE_NAME: &str = "MongoFlow Go Service";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: Mode,
    pub port: u16,
    pub service_name: String,
}

impl AppConfig {
    pub fn from_env(mode: Mode) -> Self {
        Self::from_lookup(mode, |key| std::env::var(key).ok())
    }

    fn from_lookup(mode: Mode, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "Invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            mode,
            port,
            service_name: lookup("SERVICE_NAME")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        }
    }

    /// Address for the standalone listener. Unused in event-driven mode.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn running_message(&self) -> String {
        self.mode.running_message(&self.service_name)
    }
}
