use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub environment: String,
    pub log_requests: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| "Invalid PORT")?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let log_requests = env::var("LOG_REQUESTS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| "Invalid LOG_REQUESTS")?;

        Ok(Config {
            server_host,
            server_port,
            environment,
            log_requests,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
