use crate::error::ConfigError;

/// Port a serve target uses when its token does not name one.
pub const DEFAULT_SERVE_PORT: u16 = 8080;

/// One directory of build output exposed over one network listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeTarget {
    /// Top-level directory of build output to serve.
    pub dir: String,

    /// Port the listener binds on.
    pub port: u16,
}

impl ServeTarget {
    pub fn new(dir: impl Into<String>, port: u16) -> Self {
        Self {
            dir: dir.into(),
            port,
        }
    }

    /// Parse a raw `dir` or `dir:port` token.
    ///
    /// The directory is taken as-is; whether it exists is the build engine's
    /// concern, not the parser's. The port, when present, must be a positive
    /// integer. A second `:` is malformed input.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        let mut parts = token.split(':');
        let dir = parts.next().unwrap_or("");
        let raw_port = parts.next();

        if parts.next().is_some() {
            return Err(ConfigError::InvalidTarget {
                token: token.to_string(),
                reason: "at most one ':' is allowed".to_string(),
            });
        }
        if dir.is_empty() {
            return Err(ConfigError::InvalidTarget {
                token: token.to_string(),
                reason: "the directory must not be empty".to_string(),
            });
        }

        let port = match raw_port {
            None => DEFAULT_SERVE_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .ok()
                .filter(|port| *port > 0)
                .ok_or_else(|| ConfigError::InvalidPort {
                    token: token.to_string(),
                })?,
        };

        Ok(Self::new(dir, port))
    }
}

/// Parse positional serve-target tokens, applying the defaults.
///
/// With no tokens at all, exactly two targets are synthesized: `web:8080`
/// and `test:8081`.
pub fn parse_targets(tokens: &[String]) -> Result<Vec<ServeTarget>, ConfigError> {
    if tokens.is_empty() {
        return Ok(vec![
            ServeTarget::new("web", DEFAULT_SERVE_PORT),
            ServeTarget::new("test", DEFAULT_SERVE_PORT + 1),
        ]);
    }
    tokens.iter().map(|token| ServeTarget::parse(token)).collect()
}
