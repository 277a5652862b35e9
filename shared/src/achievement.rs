use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::{Achievement, AchievementLevel, Child};

/// Goal id -> level for the currently selected child
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelMap(HashMap<String, AchievementLevel>);

impl LevelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_achievements(achievements: &[Achievement]) -> Self {
        Self(
            achievements
                .iter()
                .map(|a| (a.goal_id.clone(), a.level))
                .collect(),
        )
    }

    pub fn get(&self, goal_id: &str) -> Option<AchievementLevel> {
        self.0.get(goal_id).copied()
    }

    pub fn set(&mut self, goal_id: impl Into<String>, level: AchievementLevel) {
        self.0.insert(goal_id.into(), level);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the level map for a newly selected child.
///
/// The child's own achievements win. When it has none, the record with the
/// same id in `reference` (the bundled dataset) seeds the map instead.
pub fn seed_levels(selection: &Child, reference: &[Child]) -> LevelMap {
    if !selection.achievements.is_empty() {
        return LevelMap::from_achievements(&selection.achievements);
    }

    reference
        .iter()
        .find(|child| child.id == selection.id)
        .map(|child| LevelMap::from_achievements(&child.achievements))
        .unwrap_or_default()
}

/// Return a copy of `child` with the level for `goal_id` recorded.
///
/// An existing achievement for the goal has its level and timestamp replaced;
/// otherwise a new record is appended. Either way the child ends up with
/// exactly one achievement for the goal.
pub fn upsert_achievement(
    child: &Child,
    goal_id: &str,
    level: AchievementLevel,
    at: DateTime<Utc>,
) -> Child {
    let mut updated = child.clone();

    match updated.achievements.iter_mut().find(|a| a.goal_id == goal_id) {
        Some(existing) => {
            existing.level = level;
            existing.last_updated = at;
        }
        None => updated.achievements.push(Achievement {
            id: Achievement::generate_id(),
            goal_id: goal_id.to_string(),
            level,
            last_updated: at,
            last_updated_by: None,
            notes: String::new(),
        }),
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn achievement(goal_id: &str, level: AchievementLevel) -> Achievement {
        Achievement {
            id: format!("achievement::{}", goal_id),
            goal_id: goal_id.to_string(),
            level,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            last_updated_by: None,
            notes: "observed at intake".to_string(),
        }
    }

    fn child(id: &str, achievements: Vec<Achievement>) -> Child {
        Child {
            id: id.to_string(),
            first_name: "Ava".to_string(),
            last_name: "Lee".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            achievements,
        }
    }

    #[test]
    fn test_seed_prefers_selection_achievements() {
        let selection = child("child::1", vec![achievement("goal::gm-1", AchievementLevel::Beginner)]);
        let reference = vec![child("child::1", vec![achievement("goal::gm-1", AchievementLevel::Master)])];

        let levels = seed_levels(&selection, &reference);
        assert_eq!(levels.get("goal::gm-1"), Some(AchievementLevel::Beginner));
        assert_eq!(levels.len(), 1);
    }

    #[test]
    fn test_seed_falls_back_to_reference_data() {
        let selection = child("child::1", Vec::new());
        let reference = vec![
            child("child::2", vec![achievement("goal::gm-1", AchievementLevel::Advanced)]),
            child("child::1", vec![achievement("goal::gm-2", AchievementLevel::Intermediate)]),
        ];

        let levels = seed_levels(&selection, &reference);
        assert_eq!(levels.get("goal::gm-2"), Some(AchievementLevel::Intermediate));
        assert_eq!(levels.get("goal::gm-1"), None);
    }

    #[test]
    fn test_seed_empty_when_nothing_known() {
        let selection = child("child::42", Vec::new());
        assert!(seed_levels(&selection, &[]).is_empty());
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let original = child("child::1", vec![achievement("goal::gm-1", AchievementLevel::Beginner)]);
        let at = Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap();

        let updated = upsert_achievement(&original, "goal::gm-1", AchievementLevel::Advanced, at);

        assert_eq!(updated.achievements.len(), 1);
        let record = &updated.achievements[0];
        assert_eq!(record.id, "achievement::goal::gm-1");
        assert_eq!(record.level, AchievementLevel::Advanced);
        assert_eq!(record.last_updated, at);
        assert_eq!(record.notes, "observed at intake");
        // Input is left untouched
        assert_eq!(original.achievements[0].level, AchievementLevel::Beginner);
    }

    #[test]
    fn test_upsert_appends_new_record() {
        let original = child("child::1", vec![achievement("goal::gm-1", AchievementLevel::Beginner)]);
        let at = Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap();

        let updated = upsert_achievement(&original, "goal::fm-3", AchievementLevel::NotStarted, at);

        assert_eq!(updated.achievements.len(), 2);
        let record = updated.achievement_for("goal::fm-3").unwrap();
        assert!(record.id.starts_with("achievement::"));
        assert_eq!(record.level, AchievementLevel::NotStarted);
        assert_eq!(record.last_updated_by, None);
        assert!(record.notes.is_empty());
    }

    #[test]
    fn test_upsert_keeps_one_record_per_goal() {
        let at = Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap();
        let mut current = child("child::1", Vec::new());
        for level in AchievementLevel::ALL {
            current = upsert_achievement(&current, "goal::bal-2", level, at);
        }
        assert_eq!(current.achievements.len(), 1);
        assert_eq!(current.achievements[0].level, AchievementLevel::Master);
    }
}
