//! Application configuration for the API service

use std::env;

/// Port the service listens on. Fixed, not configurable.
pub const PORT: u16 = 3333;

/// Name of the session cookie issued at registration
pub const SESSION_COOKIE: &str = "sessionId";

/// Session cookie lifetime in seconds (1 day)
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// Runtime configuration for the API service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Runtime mode flag ("development", "test", or "production")
    pub environment: String,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `APP_ENV`: runtime mode (default: "development")
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Self { environment }
    }

    /// Whether the service is running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_app_config_defaults_to_development() {
        unsafe {
            std::env::remove_var("APP_ENV");
        }

        let config = AppConfig::from_env();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
    }

    #[test]
    #[serial]
    fn test_app_config_reads_app_env() {
        unsafe {
            std::env::set_var("APP_ENV", "production");
        }

        let config = AppConfig::from_env();
        assert!(config.is_production());

        unsafe {
            std::env::remove_var("APP_ENV");
        }
    }
}
