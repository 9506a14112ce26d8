//! Activities domain models.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::{require_amount, require_non_negative, require_text, require_timestamp};

/// Domain model representing a planned trip activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub start_time: String,
    pub duration: i64,
    pub cost: f64,
    pub location: String,
    pub notes: Option<String>,
    pub completed: bool,
}

/// Input model for creating a new activity.
///
/// There is no `completed` field: every activity starts out not completed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub title: String,
    pub start_time: String,
    pub duration: i64,
    pub cost: f64,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewActivity {
    /// Checks applied in strict validation mode.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("location", &self.location)?;
        require_timestamp("start_time", &self.start_time)?;
        require_non_negative("duration", self.duration)?;
        require_amount("cost", self.cost)?;
        Ok(())
    }
}
