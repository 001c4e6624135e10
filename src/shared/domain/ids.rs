use uuid::Uuid;

/// 32 lowercase hex characters, no dashes.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
