use std::fmt;

/// Set by the Lambda execution environment for every function instance.
pub const LAMBDA_INDICATOR_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// How the process receives requests. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The Lambda runtime delivers one request per invocation.
    EventDriven,
    /// The process owns a TCP listener and serves until killed.
    StandaloneServer,
}

impl Mode {
    /// A non-empty indicator selects `EventDriven`; anything else is standalone.
    pub fn from_indicator(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Mode::EventDriven,
            _ => Mode::StandaloneServer,
        }
    }

    pub fn detect() -> Self {
        let value = std::env::var_os(LAMBDA_INDICATOR_VAR);
        Self::from_indicator(value.as_ref().map(|v| v.to_string_lossy()).as_deref())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::EventDriven => "event-driven",
            Mode::StandaloneServer => "standalone",
        }
    }

    /// Message returned by `GET /`. The two wordings are relied on by clients
    /// to tell the hosting modes apart.
    pub fn running_message(&self, service_name: &str) -> String {
        match self {
            Mode::EventDriven => format!("{} is running", service_name),
            Mode::StandaloneServer => format!("{} is running locally", service_name),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
