use uuid::Uuid;

/// Generate a fresh opaque record identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
