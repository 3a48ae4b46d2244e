use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::Reading;

// Upper bound on the historical window served to the dashboard.
const HISTORY_LIMIT: i64 = 50;

pub struct ReadingService {
    db: SqlitePool,
}

impl ReadingService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // Stamps the document with server receipt time under the reserved
    // `timestamp` key, overwriting any client-supplied value.
    pub async fn ingest(&self, mut fields: Map<String, Value>) -> Result<String, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        fields.insert("timestamp".to_string(), Value::String(timestamp.clone()));

        sqlx::query("INSERT INTO sensor_data (id, body, timestamp) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(Value::Object(fields).to_string())
            .bind(&timestamp)
            .execute(&self.db)
            .await?;

        Ok(id)
    }

    pub async fn latest(&self) -> Result<Option<Value>, sqlx::Error> {
        let reading = sqlx::query_as::<_, Reading>(
            "SELECT id, body, timestamp FROM sensor_data
             ORDER BY timestamp DESC, rowid DESC
             LIMIT 1",
        )
        .fetch_optional(&self.db)
        .await?;

        reading
            .map(Reading::into_document)
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }

    // Newest-first window of up to 50 readings, delivered oldest-first.
    pub async fn history(&self) -> Result<Vec<Value>, sqlx::Error> {
        let readings = sqlx::query_as::<_, Reading>(
            "SELECT id, body, timestamp FROM sensor_data
             ORDER BY timestamp DESC, rowid DESC
             LIMIT ?",
        )
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.db)
        .await?;

        let mut documents = readings
            .into_iter()
            .map(Reading::into_document)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        documents.reverse();
        Ok(documents)
    }
}
