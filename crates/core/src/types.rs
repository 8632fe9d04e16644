/// Record identifiers are UUID v7, so sorting by id follows insertion order.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh, never reused record identifier.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::now_v7()
}
