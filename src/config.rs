use std::env;

// ============================================================================
// Configuration - environment-driven settings
// ============================================================================
//
// Everything has a usable default so the service starts with no
// environment at all. `CAMPUS_TOKEN_ID` is the asset-id fallback applied
// when an event is created without an explicit asset reference.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Default external-ledger asset id for newly created events
    pub campus_token_id: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
            campus_token_id: env::var("CAMPUS_TOKEN_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            campus_token_id: 0,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 4000);
        assert_eq!(config.campus_token_id, 0);
    }
}
