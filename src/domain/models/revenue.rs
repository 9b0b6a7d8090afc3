use serde::{Deserialize, Serialize};

/// Aggregate revenue for one month. The month label is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
