// User domain model
use serde::Deserialize;

/// Profile of the authenticated user. Field spellings follow the backend
/// wire format verbatim, including `surename`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub surename: String,
    pub username: String,
    pub email: String,
    pub role: String,
}
