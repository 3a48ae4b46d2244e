use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::Command;

pub struct CommandService {
    db: SqlitePool,
}

impl CommandService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn enqueue(&self, motor_command: &str, source: &str) -> Result<Command, sqlx::Error> {
        sqlx::query_as::<_, Command>(
            "INSERT INTO commands (id, motor_command, timestamp, executed, source)
             VALUES (?, ?, ?, 0, ?)
             RETURNING id, motor_command, timestamp, executed, source",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(motor_command)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        .bind(source)
        .fetch_one(&self.db)
        .await
    }

    // Claims the newest pending command (last-in-first-served) and flips its
    // executed flag in the same statement; a command is claimed exactly once.
    pub async fn dequeue(&self) -> Result<Option<Command>, sqlx::Error> {
        sqlx::query_as::<_, Command>(
            "UPDATE commands
             SET executed = 1
             WHERE executed = 0
               AND id = (SELECT id FROM commands
                         WHERE executed = 0
                         ORDER BY timestamp DESC, rowid DESC
                         LIMIT 1)
             RETURNING id, motor_command, timestamp, executed, source",
        )
        .fetch_optional(&self.db)
        .await
    }
}
