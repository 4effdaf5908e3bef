use serde::Deserialize;
use serde::Serialize;

use super::UserProfile;

/// The persisted session document: the opaque bearer credential and the
/// cached identity, always stored and cleared together.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub credential: Option<String>,
    pub identity: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        return self.credential.is_some();
    }
}
