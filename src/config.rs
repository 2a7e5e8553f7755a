use std::env;

/// Process configuration, read once at startup and passed down as shared data.
///
/// Missing required variables abort the process immediately; there is no
/// point serving requests without a store or a signing secret.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub client_url: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("PORT must be a number"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            client_url: env::var("CLIENT_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required environment variables
        env::set_var("DATABASE_URL", "postgres://test");
        env::set_var("JWT_SECRET", "test-secret");

        let config = Config::from_env();

        assert_eq!(config.database_url, "postgres://test");
        assert_eq!(config.jwt_secret, "test-secret");
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.client_url, "http://localhost:5173");
        assert_eq!(config.environment, "development");
        assert_eq!(config.server_url(), "http://127.0.0.1:5000");

        // Test custom values
        env::set_var("PORT", "3006");
        env::set_var("HOST", "0.0.0.0");
        env::set_var("CLIENT_URL", "https://todos.example.com");
        env::set_var("APP_ENV", "production");

        let config = Config::from_env();

        assert_eq!(config.port, 3006);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.client_url, "https://todos.example.com");
        assert_eq!(config.environment, "production");

        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("CLIENT_URL");
        env::remove_var("APP_ENV");
    }
}
