use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dashboard account. The bcrypt hash is what gets stored; the plaintext
/// only exists on the signup and seeding paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
