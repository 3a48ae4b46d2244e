#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub db_path: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("TANKSERVER_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            db_path: std::env::var("TANKSERVER_DB_PATH")
                .unwrap_or_else(|_| ".tankserver.db".to_string()),
        }
    }
}
