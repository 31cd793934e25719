use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    View,
    Edit,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessMode {
    pub mode: AccessTier,
    pub email: Option<String>,
}

impl AccessMode {
    pub fn can_edit(&self) -> bool {
        self.mode == AccessTier::Edit
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AllowedUserEntry {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RAllowedUsersSeed {
    pub users: Vec<AllowedUserEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllowedUsersSeedRes {
    pub inserted_count: usize,
    pub emails: Vec<String>,
}
