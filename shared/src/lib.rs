use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod achievement;
pub mod age;
pub mod catalog;
pub mod dashboard;
pub mod fixtures;
pub mod search;

pub use achievement::{seed_levels, upsert_achievement, LevelMap};
pub use age::{age_in_years, format_long_date};
pub use catalog::{partition_goals, AgeBucket, AgePanel, DomainSection, SubAreaGroup, AGE_BUCKETS};
pub use dashboard::{AgeField, DashboardAction, DashboardState, DataSource, LoadStatus};
pub use fixtures::FixtureError;
pub use search::{compile_pattern, search_children, SearchError, SearchView};

/// A child whose developmental progress is being assessed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO 8601 calendar date (YYYY-MM-DD)
    pub date_of_birth: NaiveDate,
    /// Recorded achievements, at most one per goal
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Child {
    /// Name shown in the search box and suggestion list
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn achievement_for(&self, goal_id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.goal_id == goal_id)
    }
}

/// A developmental goal from the assessment catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub domain: Domain,
    /// Only meaningful for ADL and SENSORY_INTEGRATION goals
    #[serde(default)]
    pub sub_area: Option<SubArea>,
    pub min_age_months: u32,
    pub max_age_months: u32,
}

/// A child's progress against a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Achievement ID in format: "achievement::<uuid>" for locally created records
    pub id: String,
    pub goal_id: String,
    pub level: AchievementLevel,
    /// RFC 3339 timestamp of the last level change
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Achievement {
    /// Generate an identifier for an achievement recorded in this session
    pub fn generate_id() -> String {
        format!("achievement::{}", uuid::Uuid::new_v4())
    }
}

/// Ordinal progress marker, NOT_STARTED < ... < MASTER
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementLevel {
    NotStarted,
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl AchievementLevel {
    pub const ALL: [AchievementLevel; 5] = [
        AchievementLevel::NotStarted,
        AchievementLevel::Beginner,
        AchievementLevel::Intermediate,
        AchievementLevel::Advanced,
        AchievementLevel::Master,
    ];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementLevel::NotStarted => "NOT_STARTED",
            AchievementLevel::Beginner => "BEGINNER",
            AchievementLevel::Intermediate => "INTERMEDIATE",
            AchievementLevel::Advanced => "ADVANCED",
            AchievementLevel::Master => "MASTER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AchievementLevel::NotStarted => "Not Started",
            AchievementLevel::Beginner => "Beginner",
            AchievementLevel::Intermediate => "Intermediate",
            AchievementLevel::Advanced => "Advanced",
            AchievementLevel::Master => "Master",
        }
    }
}

impl fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown achievement level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for AchievementLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AchievementLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Top-level developmental category, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    GrossMotor,
    FineMotor,
    BalanceAndCoordination,
    SocialInteraction,
    Adl,
    PlaySkill,
    BrainGym,
    HigherFunctioning,
    BilateralIntegration,
    SensoryIntegration,
}

impl Domain {
    pub const ALL: [Domain; 10] = [
        Domain::GrossMotor,
        Domain::FineMotor,
        Domain::BalanceAndCoordination,
        Domain::SocialInteraction,
        Domain::Adl,
        Domain::PlaySkill,
        Domain::BrainGym,
        Domain::HigherFunctioning,
        Domain::BilateralIntegration,
        Domain::SensoryIntegration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Domain::GrossMotor => "Gross Motor",
            Domain::FineMotor => "Fine Motor",
            Domain::BalanceAndCoordination => "Balance and Coordination",
            Domain::SocialInteraction => "Social Interaction",
            Domain::Adl => "Activities of Daily Living",
            Domain::PlaySkill => "Play Skill",
            Domain::BrainGym => "Brain Gym",
            Domain::HigherFunctioning => "Higher Functioning",
            Domain::BilateralIntegration => "Bilateral Integration",
            Domain::SensoryIntegration => "Sensory Integration",
        }
    }

    /// Sub-areas this domain is split into; empty for unsplit domains
    pub fn sub_areas(&self) -> &'static [SubArea] {
        match self {
            Domain::Adl => &SubArea::ADL,
            Domain::SensoryIntegration => &SubArea::SENSORY_INTEGRATION,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubArea {
    // ADL
    Hygiene,
    Dressing,
    Toileting,
    Eating,
    Continence,
    Mobility,
    // Sensory integration
    Tactile,
    Vestibular,
    Proprioceptive,
    Visual,
    Auditory,
    Olfactory,
    Gustatory,
}

impl SubArea {
    pub const ADL: [SubArea; 6] = [
        SubArea::Hygiene,
        SubArea::Dressing,
        SubArea::Toileting,
        SubArea::Eating,
        SubArea::Continence,
        SubArea::Mobility,
    ];

    pub const SENSORY_INTEGRATION: [SubArea; 7] = [
        SubArea::Tactile,
        SubArea::Vestibular,
        SubArea::Proprioceptive,
        SubArea::Visual,
        SubArea::Auditory,
        SubArea::Olfactory,
        SubArea::Gustatory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SubArea::Hygiene => "Hygiene",
            SubArea::Dressing => "Dressing",
            SubArea::Toileting => "Toileting",
            SubArea::Eating => "Eating",
            SubArea::Continence => "Continence",
            SubArea::Mobility => "Mobility",
            SubArea::Tactile => "Tactile",
            SubArea::Vestibular => "Vestibular",
            SubArea::Proprioceptive => "Proprioceptive",
            SubArea::Visual => "Visual",
            SubArea::Auditory => "Auditory",
            SubArea::Olfactory => "Olfactory",
            SubArea::Gustatory => "Gustatory",
        }
    }
}
