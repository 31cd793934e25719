use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::compare_names;
use crate::types::delegate::Delegate;

/// Printed sheet width. Each team gets one row with a bounded number of
/// delegate columns; anyone past the limit is left off the printed row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportLayout {
    #[default]
    Compact,
    Wide,
}

impl ReportLayout {
    pub fn from_columns(columns: usize) -> Option<Self> {
        match columns {
            5 => Some(Self::Compact),
            10 => Some(Self::Wide),
            _ => None,
        }
    }

    pub fn capacity(self) -> usize {
        match self {
            Self::Compact => 5,
            Self::Wide => 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportDelegate {
    pub name: String,
    pub category: Option<String>,
    pub day1: bool,
    pub day2: bool,
    pub day3: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamRow {
    pub team_id: i32,
    /// Size of the whole team, not of `delegates`.
    pub delegate_count: usize,
    pub delegates: Vec<ReportDelegate>,
}

/// Groups delegates into one row per team, teams ascending, members by name.
/// The result does not depend on the order of `delegates`.
pub fn build_report(delegates: &[Delegate], layout: ReportLayout) -> Vec<TeamRow> {
    let mut teams: BTreeMap<i32, Vec<&Delegate>> = BTreeMap::new();
    for d in delegates {
        teams.entry(d.team_id).or_default().push(d);
    }

    teams
        .into_iter()
        .map(|(team_id, mut members)| {
            members.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));
            TeamRow {
                team_id,
                delegate_count: members.len(),
                delegates: members
                    .into_iter()
                    .take(layout.capacity())
                    .map(|d| ReportDelegate {
                        name: d.name.clone(),
                        category: d.category.clone(),
                        day1: d.attendance.day1,
                        day2: d.attendance.day2,
                        day3: d.attendance.day3,
                    })
                    .collect(),
            }
        })
        .collect()
}
