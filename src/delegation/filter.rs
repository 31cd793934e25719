use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::compare_names;
use crate::types::delegate::{Delegate, DelegateStats, FilterOptions};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceFilter {
    #[default]
    All,
    Present,
    Absent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    #[default]
    Team,
    Attendance,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegateFilter {
    pub search: Option<String>,
    pub teams: HashSet<i32>,
    pub categories: HashSet<String>,
    pub attendance: AttendanceFilter,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

impl DelegateFilter {
    pub fn is_active(&self) -> bool {
        self.needle().is_some()
            || !self.teams.is_empty()
            || !self.categories.is_empty()
            || self.attendance != AttendanceFilter::All
    }

    /// Lowercased search text. Whitespace-only input disables the search,
    /// otherwise the text is matched as typed, surrounding spaces included.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_lowercase)
    }

    fn matches(&self, d: &Delegate, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let hit = d.name.to_lowercase().contains(needle)
                || d.category.as_deref().is_some_and(|c| c.to_lowercase().contains(needle))
                || d.team_id.to_string().contains(needle);
            if !hit {
                return false;
            }
        }
        if !self.teams.is_empty() && !self.teams.contains(&d.team_id) {
            return false;
        }
        if !self.categories.is_empty()
            && !d.category.as_ref().is_some_and(|c| self.categories.contains(c))
        {
            return false;
        }
        match self.attendance {
            AttendanceFilter::All => true,
            AttendanceFilter::Present => d.attendance.is_present(),
            AttendanceFilter::Absent => !d.attendance.is_present(),
        }
    }

    fn compare(&self, a: &Delegate, b: &Delegate) -> Ordering {
        let ord = match self.sort_by {
            SortBy::Name => compare_names(&a.name, &b.name),
            SortBy::Team => a.team_id.cmp(&b.team_id).then_with(|| compare_names(&a.name, &b.name)),
            // absent (false) before present (true)
            SortBy::Attendance => a
                .attendance
                .is_present()
                .cmp(&b.attendance.is_present())
                .then_with(|| compare_names(&a.name, &b.name)),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Filtered, sorted view over the full delegate set. Recomputed from scratch
/// on every call.
pub fn apply_filter(delegates: &[Delegate], filter: &DelegateFilter) -> Vec<Delegate> {
    let needle = filter.needle();

    let mut out: Vec<Delegate> = delegates
        .iter()
        .filter(|d| filter.matches(d, needle.as_deref()))
        .cloned()
        .collect();
    out.sort_by(|a, b| filter.compare(a, b));
    out
}

/// Teams and categories to offer as filter choices, derived from the data.
pub fn filter_options(delegates: &[Delegate]) -> FilterOptions {
    let teams: BTreeSet<i32> = delegates.iter().map(|d| d.team_id).collect();
    let categories: BTreeSet<String> = delegates.iter().filter_map(|d| d.category.clone()).collect();
    FilterOptions {
        teams: teams.into_iter().collect(),
        categories: categories.into_iter().collect(),
    }
}

pub fn delegate_stats(delegates: &[Delegate]) -> DelegateStats {
    let present = delegates.iter().filter(|d| d.attendance.is_present()).count();
    DelegateStats {
        total: delegates.len(),
        present,
        absent: delegates.len() - present,
        unique_teams: delegates.iter().map(|d| d.team_id).collect::<HashSet<_>>().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::delegate::Attendance;
    use chrono::Utc;
    use uuid::Uuid;

    fn delegate(team_id: i32, name: &str, category: Option<&str>, present: bool) -> Delegate {
        let now = Utc::now();
        Delegate {
            id: Uuid::new_v4(),
            team_id,
            name: name.into(),
            category: category.map(String::from),
            is_head: false,
            attendance: if present { Attendance::present() } else { Attendance::absent() },
            created_at: now,
            updated_at: now,
        }
    }

    fn fixture() -> Vec<Delegate> {
        vec![
            delegate(2, "Diana Prince", Some("Marketing"), true),
            delegate(1, "bob smith", Some("Engineering"), false),
            delegate(1, "Alice Johnson", Some("Engineering"), true),
            delegate(12, "Laura Martinez", None, false),
        ]
    }

    fn names(list: &[Delegate]) -> Vec<&str> {
        list.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn default_filter_sorts_by_team_then_name() {
        let out = apply_filter(&fixture(), &DelegateFilter::default());
        assert_eq!(names(&out), vec!["Alice Johnson", "bob smith", "Diana Prince", "Laura Martinez"]);
    }

    #[test]
    fn search_hits_name_category_and_team() {
        let mut f = DelegateFilter { search: Some("MARK".into()), ..Default::default() };
        assert_eq!(names(&apply_filter(&fixture(), &f)), vec!["Diana Prince"]);

        f.search = Some("12".into());
        assert_eq!(names(&apply_filter(&fixture(), &f)), vec!["Laura Martinez"]);

        f.search = Some("2".into());
        assert_eq!(names(&apply_filter(&fixture(), &f)), vec!["Diana Prince", "Laura Martinez"]);
    }

    #[test]
    fn search_text_is_not_trimmed() {
        let f = DelegateFilter { search: Some(" smith".into()), ..Default::default() };
        assert_eq!(names(&apply_filter(&fixture(), &f)), vec!["bob smith"]);

        // the trailing space has nothing to match after "Martinez"
        let f = DelegateFilter { search: Some("martinez ".into()), ..Default::default() };
        assert!(apply_filter(&fixture(), &f).is_empty());
        assert!(f.is_active());

        let blank = DelegateFilter { search: Some("   ".into()), ..Default::default() };
        assert_eq!(apply_filter(&fixture(), &blank).len(), 4);
        assert!(!blank.is_active());
    }

    #[test]
    fn team_and_category_sets_combine() {
        let f = DelegateFilter {
            teams: HashSet::from([1, 12]),
            categories: HashSet::from(["Engineering".to_string()]),
            ..Default::default()
        };
        assert_eq!(names(&apply_filter(&fixture(), &f)), vec!["Alice Johnson", "bob smith"]);
    }

    #[test]
    fn attendance_filter_uses_full_presence() {
        let mut partial = delegate(3, "Partial", None, false);
        partial.attendance = Attendance { day1: true, day2: true, day3: false };
        let mut all = fixture();
        all.push(partial);

        let present = DelegateFilter { attendance: AttendanceFilter::Present, ..Default::default() };
        assert_eq!(names(&apply_filter(&all, &present)), vec!["Alice Johnson", "Diana Prince"]);

        let absent = DelegateFilter { attendance: AttendanceFilter::Absent, ..Default::default() };
        assert_eq!(names(&apply_filter(&all, &absent)), vec!["bob smith", "Partial", "Laura Martinez"]);
    }

    #[test]
    fn sort_by_attendance_puts_absent_first() {
        let f = DelegateFilter { sort_by: SortBy::Attendance, ..Default::default() };
        assert_eq!(
            names(&apply_filter(&fixture(), &f)),
            vec!["bob smith", "Laura Martinez", "Alice Johnson", "Diana Prince"]
        );
    }

    #[test]
    fn descending_reverses_name_order() {
        let f = DelegateFilter { sort_by: SortBy::Name, order: SortOrder::Desc, ..Default::default() };
        assert_eq!(
            names(&apply_filter(&fixture(), &f)),
            vec!["Laura Martinez", "Diana Prince", "bob smith", "Alice Johnson"]
        );
    }

    #[test]
    fn options_and_stats_cover_everything() {
        let all = fixture();
        let opts = filter_options(&all);
        assert_eq!(opts.teams, vec![1, 2, 12]);
        assert_eq!(opts.categories, vec!["Engineering".to_string(), "Marketing".to_string()]);

        let stats = delegate_stats(&all);
        assert_eq!(stats, DelegateStats { total: 4, present: 2, absent: 2, unique_teams: 3 });
        assert!(!DelegateFilter::default().is_active());
        assert!(DelegateFilter { teams: HashSet::from([2]), ..Default::default() }.is_active());
    }
}
