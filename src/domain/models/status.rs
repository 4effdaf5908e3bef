#[cfg(test)]
#[path = "status_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

/// Lifecycle field carried by every entity the console can activate or
/// deactivate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum LifecycleStatus {
    Active,
    Inactive,
}

impl LifecycleStatus {
    pub fn toggled(&self) -> LifecycleStatus {
        if *self == LifecycleStatus::Active {
            return LifecycleStatus::Inactive;
        }

        return LifecycleStatus::Active;
    }

    /// Path segment of the status-mutation endpoint that moves a record into
    /// this status, e.g. `/users/42/deactivate`.
    pub fn action(&self) -> &'static str {
        if *self == LifecycleStatus::Active {
            return "activate";
        }

        return "deactivate";
    }
}
