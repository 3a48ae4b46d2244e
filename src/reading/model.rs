use serde_json::{Map, Value};

#[derive(Debug, sqlx::FromRow)]
pub struct Reading {
    pub id: String,
    pub body: String,
    pub timestamp: String,
}

impl Reading {
    // Reshape for transport: the stored document's fields plus `_id` and the
    // RFC 3339 receipt timestamp as plain strings.
    pub fn into_document(self) -> Result<Value, serde_json::Error> {
        let mut document: Map<String, Value> = serde_json::from_str(&self.body)?;
        document.insert("_id".to_string(), Value::String(self.id));
        document.insert("timestamp".to_string(), Value::String(self.timestamp));
        Ok(Value::Object(document))
    }
}
