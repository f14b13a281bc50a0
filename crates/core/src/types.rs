/// Entity primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// User identities come from the external auth provider as UUIDs.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
