use serde::Deserialize;
use serde::Serialize;

/// Cached identity of the signed-in administrator. The remote service stays
/// authoritative; this is display data only.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}
