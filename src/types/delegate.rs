use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Three-day attendance record. A delegate counts as present only when
/// all three days are marked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attendance {
    pub day1: bool,
    pub day2: bool,
    pub day3: bool,
}

impl Attendance {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn present() -> Self {
        Attendance { day1: true, day2: true, day3: true }
    }

    pub fn is_present(&self) -> bool {
        self.day1 && self.day2 && self.day3
    }
}

/// Slot 1 of the intake form, always included.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HeadSlot {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Slots 2..=10 of the intake form.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DelegateSlot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub included: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RDelegationCreate {
    pub head: HeadSlot,
    #[serde(default)]
    pub slots: Vec<DelegateSlot>,
}

/// A validated record waiting for its team id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDelegate {
    pub name: String,
    pub category: Option<String>,
    pub is_head: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DelegationCreateRes {
    pub team_id: i32,
    pub inserted_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SampleSeedRes {
    pub team_ids: Vec<i32>,
    pub inserted_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Delegate {
    pub id: Uuid,
    pub team_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub is_head: bool,
    pub attendance: Attendance,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::delegate::Model> for Delegate {
    fn from(m: entity::delegate::Model) -> Self {
        Delegate {
            id: m.id,
            team_id: m.team_id,
            name: m.name,
            category: m.category,
            is_head: m.is_head,
            attendance: Attendance { day1: m.day1, day2: m.day2, day3: m.day3 },
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteRes {
    pub deleted_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegateStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub unique_teams: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub teams: Vec<i32>,
    pub categories: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DelegateListRes {
    pub delegates: Vec<Delegate>,
    pub total_count: usize,
    /// True when any filter narrowed the view.
    pub filtered: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatsRes {
    pub stats: DelegateStats,
    pub options: FilterOptions,
}
