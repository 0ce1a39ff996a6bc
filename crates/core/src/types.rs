/// All database primary keys are PostgreSQL BIGSERIAL.
///
/// Zero means "not yet persisted".
pub type DbId = i64;
