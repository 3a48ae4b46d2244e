// Source tag stamped on commands issued from the dashboard.
pub const WEB_INTERFACE: &str = "web_interface";

#[derive(Debug, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Command {
    pub id: String,
    pub motor_command: String,
    pub timestamp: String,
    pub executed: bool,
    pub source: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct MotorControlRequest {
    pub command: String,
}
