/// Contact message primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Project identifiers are random UUIDs generated by the server.
pub type ProjectId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
