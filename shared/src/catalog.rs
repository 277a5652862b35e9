//! Grouping of the goal catalog for display.
//!
//! Goals are split by domain, then by sub-area for the domains that have
//! them, then into fixed age buckets. A goal lands in a bucket only when its
//! own age range equals the bucket's bounds; anything else is not shown.

use crate::{achievement::LevelMap, Domain, Goal, SubArea};

/// Month range used to group goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeBucket {
    pub min_months: u32,
    pub max_months: u32,
}

impl AgeBucket {
    pub const fn new(min_months: u32, max_months: u32) -> Self {
        Self { min_months, max_months }
    }

    pub fn contains(&self, goal: &Goal) -> bool {
        goal.min_age_months == self.min_months && goal.max_age_months == self.max_months
    }

    pub fn label(&self) -> String {
        format!("{}-{} months", self.min_months, self.max_months)
    }
}

/// Display order of the age panels
pub const AGE_BUCKETS: [AgeBucket; 11] = [
    AgeBucket::new(0, 6),
    AgeBucket::new(6, 12),
    AgeBucket::new(12, 18),
    AgeBucket::new(18, 24),
    AgeBucket::new(12, 24),
    AgeBucket::new(24, 36),
    AgeBucket::new(36, 48),
    AgeBucket::new(48, 60),
    AgeBucket::new(60, 72),
    AgeBucket::new(72, 84),
    AgeBucket::new(84, 96),
];

#[derive(Debug, Clone, PartialEq)]
pub struct AgePanel {
    pub bucket: AgeBucket,
    pub goals: Vec<Goal>,
}

/// Goals of one sub-area, or of a whole domain when `sub_area` is `None`
#[derive(Debug, Clone, PartialEq)]
pub struct SubAreaGroup {
    pub sub_area: Option<SubArea>,
    /// Non-empty panels only
    pub panels: Vec<AgePanel>,
}

impl SubAreaGroup {
    fn build<'a>(sub_area: Option<SubArea>, goals: impl Iterator<Item = &'a Goal> + Clone) -> Self {
        let panels = AGE_BUCKETS
            .iter()
            .filter_map(|bucket| {
                let in_bucket: Vec<Goal> = goals.clone().filter(|g| bucket.contains(g)).cloned().collect();
                (!in_bucket.is_empty()).then(|| AgePanel {
                    bucket: *bucket,
                    goals: in_bucket,
                })
            })
            .collect();

        Self { sub_area, panels }
    }

    pub fn goals(&self) -> impl Iterator<Item = &Goal> {
        self.panels.iter().flat_map(|panel| panel.goals.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainSection {
    pub domain: Domain,
    pub groups: Vec<SubAreaGroup>,
}

impl DomainSection {
    pub fn goals(&self) -> impl Iterator<Item = &Goal> {
        self.groups.iter().flat_map(|group| group.goals())
    }

    /// Number of displayed goals in this domain
    pub fn total_goals(&self) -> usize {
        self.goals().count()
    }

    /// Number of displayed goals that have a level recorded
    pub fn recorded_goals(&self, levels: &LevelMap) -> usize {
        self.goals().filter(|goal| levels.get(&goal.id).is_some()).count()
    }
}

/// Partition the catalog into one section per domain, in display order.
///
/// Every domain gets a section even when it has no displayable goals. For ADL
/// and sensory integration every sub-area gets a group; goals in those
/// domains without a sub-area are not shown.
pub fn partition_goals(goals: &[Goal]) -> Vec<DomainSection> {
    Domain::ALL
        .iter()
        .map(|&domain| {
            let in_domain = goals.iter().filter(move |g| g.domain == domain);

            let groups = if domain.sub_areas().is_empty() {
                vec![SubAreaGroup::build(None, in_domain)]
            } else {
                domain
                    .sub_areas()
                    .iter()
                    .map(|&sub_area| {
                        let in_sub_area = in_domain.clone().filter(move |g| g.sub_area == Some(sub_area));
                        SubAreaGroup::build(Some(sub_area), in_sub_area)
                    })
                    .collect()
            };

            DomainSection { domain, groups }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AchievementLevel;

    fn goal(id: &str, domain: Domain, sub_area: Option<SubArea>, min: u32, max: u32) -> Goal {
        Goal {
            id: id.to_string(),
            name: format!("Goal {}", id),
            domain,
            sub_area,
            min_age_months: min,
            max_age_months: max,
        }
    }

    fn section(sections: &[DomainSection], domain: Domain) -> &DomainSection {
        sections.iter().find(|s| s.domain == domain).unwrap()
    }

    #[test]
    fn test_one_section_per_domain_in_order() {
        let sections = partition_goals(&[]);
        let domains: Vec<Domain> = sections.iter().map(|s| s.domain).collect();
        assert_eq!(domains, Domain::ALL.to_vec());
        assert!(sections.iter().all(|s| s.total_goals() == 0));
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let goals = vec![
            goal("gm-1", Domain::GrossMotor, None, 24, 36),
            goal("gm-2", Domain::GrossMotor, None, 0, 6),
            goal("gm-3", Domain::GrossMotor, None, 24, 36),
        ];
        let sections = partition_goals(&goals);
        let gross_motor = section(&sections, Domain::GrossMotor);

        assert_eq!(gross_motor.groups.len(), 1);
        let panels = &gross_motor.groups[0].panels;
        let buckets: Vec<AgeBucket> = panels.iter().map(|p| p.bucket).collect();
        assert_eq!(buckets, vec![AgeBucket::new(0, 6), AgeBucket::new(24, 36)]);
        assert_eq!(panels[1].goals.len(), 2);
    }

    #[test]
    fn test_goals_only_in_exactly_matching_bucket() {
        let goals = vec![
            goal("fm-1", Domain::FineMotor, None, 12, 24),
            goal("fm-2", Domain::FineMotor, None, 12, 18),
            goal("fm-3", Domain::FineMotor, None, 18, 24),
        ];
        let sections = partition_goals(&goals);

        for panel in &section(&sections, Domain::FineMotor).groups[0].panels {
            for g in &panel.goals {
                assert_eq!((g.min_age_months, g.max_age_months), (panel.bucket.min_months, panel.bucket.max_months));
            }
        }
        assert_eq!(section(&sections, Domain::FineMotor).total_goals(), 3);
    }

    #[test]
    fn test_goals_outside_buckets_are_hidden() {
        let goals = vec![
            goal("hf-1", Domain::HigherFunctioning, None, 96, 108),
            goal("hf-2", Domain::HigherFunctioning, None, 0, 12),
            goal("hf-3", Domain::HigherFunctioning, None, 36, 48),
        ];
        let sections = partition_goals(&goals);
        let higher = section(&sections, Domain::HigherFunctioning);

        let ids: Vec<&str> = higher.goals().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["hf-3"]);
    }

    #[test]
    fn test_sub_area_groups_for_split_domains() {
        let goals = vec![
            goal("adl-1", Domain::Adl, Some(SubArea::Eating), 24, 36),
            goal("adl-2", Domain::Adl, Some(SubArea::Hygiene), 36, 48),
            goal("adl-3", Domain::Adl, None, 36, 48),
            goal("si-1", Domain::SensoryIntegration, Some(SubArea::Vestibular), 48, 60),
        ];
        let sections = partition_goals(&goals);

        let adl = section(&sections, Domain::Adl);
        let sub_areas: Vec<Option<SubArea>> = adl.groups.iter().map(|g| g.sub_area).collect();
        assert_eq!(sub_areas, SubArea::ADL.iter().copied().map(Some).collect::<Vec<_>>());
        assert_eq!(adl.groups[0].goals().next().unwrap().id, "adl-2");
        assert_eq!(adl.groups[3].goals().next().unwrap().id, "adl-1");
        // Sub-area-less ADL goal is not displayed
        assert_eq!(adl.total_goals(), 2);

        let sensory = section(&sections, Domain::SensoryIntegration);
        assert_eq!(sensory.groups.len(), 7);
        assert_eq!(sensory.groups[1].sub_area, Some(SubArea::Vestibular));
        assert_eq!(sensory.groups[1].panels.len(), 1);
        assert!(sensory.groups[0].panels.is_empty());
    }

    #[test]
    fn test_sub_area_ignored_for_unsplit_domains() {
        let goals = vec![goal("pl-1", Domain::PlaySkill, Some(SubArea::Tactile), 24, 36)];
        let sections = partition_goals(&goals);
        let play = section(&sections, Domain::PlaySkill);
        assert_eq!(play.groups.len(), 1);
        assert_eq!(play.groups[0].sub_area, None);
        assert_eq!(play.total_goals(), 1);
    }

    #[test]
    fn test_recorded_goals_counts_displayed_only() {
        let goals = vec![
            goal("gm-1", Domain::GrossMotor, None, 24, 36),
            goal("gm-2", Domain::GrossMotor, None, 36, 48),
            goal("gm-9", Domain::GrossMotor, None, 100, 120),
        ];
        let mut levels = LevelMap::new();
        levels.set("gm-1", AchievementLevel::Master);
        levels.set("gm-9", AchievementLevel::Beginner);

        let sections = partition_goals(&goals);
        let gross_motor = section(&sections, Domain::GrossMotor);
        assert_eq!(gross_motor.recorded_goals(&levels), 1);
        assert_eq!(gross_motor.total_goals(), 2);
    }
}
