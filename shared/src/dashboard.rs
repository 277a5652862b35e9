//! Assessment form state and its transitions.
//!
//! Everything the dashboard shows is derived from [`DashboardState`], and the
//! only way to change it is [`DashboardState::apply`] with a
//! [`DashboardAction`]. The rules for when the level map is seeded or reset
//! live here rather than in the view layer.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    achievement::{seed_levels, upsert_achievement, LevelMap},
    age::age_in_years,
    search::{SearchError, SearchView},
    AchievementLevel, Child, Goal,
};

/// Where a loaded resource came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    /// Bundled dataset, used after the remote request failed
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Contents of the age input
#[derive(Debug, Clone, PartialEq)]
pub enum AgeField {
    /// Free text typed while no child is selected
    Manual(String),
    /// Computed from the selected child's date of birth; not editable
    Derived(i32),
}

impl AgeField {
    pub fn is_locked(&self) -> bool {
        matches!(self, AgeField::Derived(_))
    }

    pub fn display(&self) -> String {
        match self {
            AgeField::Manual(text) => text.clone(),
            AgeField::Derived(years) => years.to_string(),
        }
    }
}

impl Default for AgeField {
    fn default() -> Self {
        AgeField::Manual(String::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Children arrived. `reference` is the bundled dataset, kept for seeding.
    ChildrenLoaded {
        children: Vec<Child>,
        source: DataSource,
        reference: Vec<Child>,
    },
    GoalsLoaded {
        goals: Vec<Goal>,
        source: DataSource,
    },
    LoadFailed(String),
    SearchChanged(String),
    ChildSelected {
        child_id: String,
        today: NaiveDate,
    },
    ChildCleared,
    AddNewChild,
    ManualAgeChanged(String),
    LevelSet {
        goal_id: String,
        level: AchievementLevel,
        at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub children: Vec<Child>,
    pub children_source: Option<DataSource>,
    pub goals: Vec<Goal>,
    pub goals_source: Option<DataSource>,
    pub reference_children: Vec<Child>,
    pub failure: Option<String>,
    pub search_text: String,
    /// Derived from `search_text`, the selection and `children`; refreshed by
    /// the actions that change them
    pub search: SearchView,
    /// Set while `search_text` is not a valid pattern
    pub search_error: Option<SearchError>,
    /// Working copy of the selected child, including edits made this session
    pub selection: Option<Child>,
    pub age: AgeField,
    pub levels: LevelMap,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LoadStatus {
        if let Some(message) = &self.failure {
            return LoadStatus::Failed(message.clone());
        }
        if self.children_source.is_some() && self.goals_source.is_some() {
            LoadStatus::Ready
        } else {
            LoadStatus::Loading
        }
    }

    /// True when either resource is being served from bundled data
    pub fn using_fallback(&self) -> bool {
        self.children_source == Some(DataSource::Fallback) || self.goals_source == Some(DataSource::Fallback)
    }

    pub fn search_view(&self) -> &SearchView {
        &self.search
    }

    pub fn level_for(&self, goal_id: &str) -> Option<AchievementLevel> {
        self.levels.get(goal_id)
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::ChildrenLoaded { children, source, reference } => {
                self.children = children;
                self.children_source = Some(source);
                self.reference_children = reference;
                self.refresh_search();
            }
            DashboardAction::GoalsLoaded { goals, source } => {
                self.goals = goals;
                self.goals_source = Some(source);
            }
            DashboardAction::LoadFailed(message) => {
                self.failure = Some(message);
            }
            DashboardAction::SearchChanged(text) => {
                self.search_text = text;
                if self.selection.is_some() {
                    self.clear_selection();
                }
                self.refresh_search();
            }
            DashboardAction::ChildSelected { child_id, today } => {
                self.select_child(&child_id, today);
                self.refresh_search();
            }
            DashboardAction::ChildCleared | DashboardAction::AddNewChild => {
                self.search_text.clear();
                self.clear_selection();
                self.refresh_search();
            }
            DashboardAction::ManualAgeChanged(text) => {
                if self.selection.is_none() {
                    self.age = AgeField::Manual(text);
                }
            }
            DashboardAction::LevelSet { goal_id, level, at } => {
                self.set_level(goal_id, level, at);
            }
        }
    }

    fn select_child(&mut self, child_id: &str, today: NaiveDate) {
        let Some(mut child) = self.children.iter().find(|c| c.id == child_id).cloned() else {
            return;
        };

        // A child with no records of its own starts from the reference
        // records, so later edits are layered on top of what is displayed
        if child.achievements.is_empty() {
            if let Some(reference) = self.reference_children.iter().find(|c| c.id == child.id) {
                child.achievements = reference.achievements.clone();
            }
        }

        self.search_text = child.full_name();
        self.age = AgeField::Derived(age_in_years(child.date_of_birth, today));
        self.levels = seed_levels(&child, &self.reference_children);
        self.selection = Some(child);
    }

    fn refresh_search(&mut self) {
        match SearchView::resolve(&self.search_text, self.selection.is_some(), &self.children) {
            Ok(view) => {
                self.search = view;
                self.search_error = None;
            }
            // An uncompilable pattern matches nobody
            Err(e) => {
                self.search = SearchView::AddNew;
                self.search_error = Some(e);
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.age = AgeField::default();
        self.levels.clear();
    }

    fn set_level(&mut self, goal_id: String, level: AchievementLevel, at: DateTime<Utc>) {
        self.levels.set(goal_id.clone(), level);

        let Some(selection) = &self.selection else {
            return;
        };

        let updated = upsert_achievement(selection, &goal_id, level, at);
        if let Some(slot) = self.children.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated.clone();
        }
        self.selection = Some(updated);
    }
}
